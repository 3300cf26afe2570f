//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod booking;
pub mod city;
pub mod customer;
pub mod quote;
pub mod review;
pub mod service;
pub mod vehicle;
