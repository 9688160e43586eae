mod in_memory_config_repository;
mod in_memory_thread_repository;

pub use in_memory_config_repository::InMemoryConfigRepository;
pub use in_memory_thread_repository::InMemoryThreadRepository;
