/// Module for field polynomial.
pub mod field_polynomial;

/// Module for KZG polynomial commitment scheme.
pub mod kzg_poly_com;

/// Module for polynomial commitment traits.
pub mod pcs;
