use colored::Color;
use dialr_common::network::address::Scope;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const ACCENT: Color = Color::BrightCyan;
pub const TEXT_DEFAULT: Color = Color::White;

pub const SCOPE_PUBLIC: Color = Color::Green;
pub const SCOPE_CLOUD: Color = Color::Cyan;
pub const SCOPE_MACHINE: Color = Color::Yellow;
pub const SCOPE_LINK: Color = Color::Red;
pub const SCOPE_UNKNOWN: Color = Color::Magenta;

pub fn for_scope(scope: Scope) -> Color {
    match scope {
        Scope::Public => SCOPE_PUBLIC,
        Scope::CloudLocal => SCOPE_CLOUD,
        Scope::MachineLocal => SCOPE_MACHINE,
        Scope::LinkLocal => SCOPE_LINK,
        Scope::Unknown => SCOPE_UNKNOWN,
    }
}
