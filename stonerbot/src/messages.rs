//! User-facing reply texts.

pub const MSG_DEALER_UNREACHABLE: &str =
    "I have problems contacting my dealer, please come back later :(";
pub const MSG_NO_STRAINS: &str = "No strains were found :(";
pub const MSG_NO_STORES: &str = "There are no stores around:(";

/// Separator between formatted strains or stores in one reply.
pub const ENTRY_SEPARATOR: &str = "\n\n";

pub const USAGE: &str = r#"Hi! Did you know that robots like cannabis too?

Use "/strains name" to get info on specific strains or
send me your location and I will find stores near you.

Powered by Leafly API (https://www.leafly.com)
If you like this bot, please rate it at: https://telegram.me/storebot?start=stonerbot
You can contribute or report any issues at: https://github.com/szastupov/stonerbot

Peace ✌️"#;
