//! Repositorios de acceso a datos
//!
//! Un repositorio por entidad; todo el SQL del servicio vive aquí.

pub mod booking_repository;
pub mod city_repository;
pub mod customer_repository;
pub mod quote_repository;
pub mod review_repository;
pub mod service_repository;
pub mod vehicle_repository;
