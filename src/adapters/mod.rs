// Adapters layer: concrete EmployeeRepository implementations.

pub mod database;
pub mod memory;

pub use database::DatabaseEmployeeRepository;
pub use memory::InMemoryEmployeeRepository;
