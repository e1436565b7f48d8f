// Infrastructure layer module
// Storage adapters for the place repository port (PostgreSQL and in-process)

pub mod repositories;
