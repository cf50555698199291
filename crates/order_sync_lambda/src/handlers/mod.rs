pub mod forward;
pub mod paginate;
pub mod sync;
