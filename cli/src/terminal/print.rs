use colored::*;
use dialr_common::network::address::Address;
use dialr_common::network::hostport::HostPort;
use tracing::info;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&line.to_string());
}

/// One ranked endpoint, e.g. `[0] 8.8.8.8:17070 (public)`.
pub fn candidate(idx: usize, hp: &HostPort) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let scope = hp.address().scope();
    let output: String = format!(
        "{} {} {}",
        idx_str.color(colors::SEPARATOR),
        hp.to_string().color(colors::TEXT_DEFAULT).bold(),
        format!("({scope})").color(colors::for_scope(scope)),
    );
    print(&output);
}

/// A key-value line for one address, keys padded to `key_width`.
pub fn address_line(address: &Address, key_width: usize) {
    let key: &str = address.value();
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.chars().count()));
    let scope = address.scope();
    let output: String = format!(
        "{} {}{}{} {} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        address.address_type().to_string().color(colors::TEXT_DEFAULT),
        scope.to_string().color(colors::for_scope(scope)),
    );
    print(&output);
}
