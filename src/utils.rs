pub mod common_affix_len;
pub mod side;
