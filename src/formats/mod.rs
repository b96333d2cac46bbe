pub mod unified;
