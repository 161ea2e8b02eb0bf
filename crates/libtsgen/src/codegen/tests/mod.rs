mod operation_transformer_tests;
pub(crate) mod test_utils;
