// Services module - business logic layer

pub mod catalog_service;
pub mod menu_assembler;

pub use catalog_service::CatalogService;
pub use menu_assembler::MenuAssembler;
