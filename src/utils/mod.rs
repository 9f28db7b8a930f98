pub mod logging;
pub mod scroll;
pub mod url;

#[cfg(test)]
pub mod test_utils;
