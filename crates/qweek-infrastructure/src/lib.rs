pub mod config_service;
pub mod document_store_participant_repository;
pub mod dto;
pub mod json_file_participant_repository;
pub mod memory_participant_repository;
pub mod paths;
pub mod storage;
pub mod store_factory;

pub use crate::config_service::ConfigService;
pub use crate::document_store_participant_repository::DocumentStoreParticipantRepository;
pub use crate::json_file_participant_repository::JsonFileParticipantRepository;
pub use crate::memory_participant_repository::InMemoryParticipantRepository;
pub use crate::paths::{PathError, QweekPaths};
pub use crate::store_factory::build_participant_repository;
