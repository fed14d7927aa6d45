// ==========================================
// Sistema de Asignación de Bodega - configuration layer
// ==========================================

pub mod allocation_profile;

pub use allocation_profile::{
    AllocationProfile, ProfileError, PROFILE_BY_LEVEL, PROFILE_INSERTION, PROFILE_RACKED,
};
