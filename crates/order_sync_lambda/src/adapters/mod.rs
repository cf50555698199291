pub mod normalize;
pub mod sp_orders;
pub mod throttle;
