pub mod bundle;
pub mod record;
pub mod svg;
