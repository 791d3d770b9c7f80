use dialr_common::network::address::Address;

use crate::terminal::print;

pub fn classify(values: &[String]) {
    let width: usize = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);
    for value in values {
        let address = Address::new(value.as_str());
        print::address_line(&address, width);
    }
}
