mod utils;
#[cfg(feature = "json")]
mod value_from_json_tests;
