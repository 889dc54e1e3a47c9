pub const THOUSANDS_SEPARATOR: char = ',';
pub const DECIMAL_SEPARATOR: char = '.';
/// Reward data is only available from this year on.
pub const MIN_START_YEAR: i32 = 2022;
pub const ONE_DAY_MS: i64 = 24 * 60 * 60 * 1000;
/// Preamble hashed into the SS58 checksum.
pub const SS58_CHECKSUM_PREAMBLE: &[u8] = b"SS58PRE";
