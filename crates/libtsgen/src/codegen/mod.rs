mod generator;
mod object_transformer;
mod operation_transformer;
mod scalar_map;
mod string_utils;

pub use generator::Generator;
pub use object_transformer::ObjectTransformer;
pub use operation_transformer::OperationTransformer;

#[cfg(test)]
mod tests;
