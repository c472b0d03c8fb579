pub mod conversation;
pub mod document_store;
pub mod model_client;

#[cfg(test)]
pub(crate) mod testing;
