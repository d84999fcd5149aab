mod trip;
mod trip_list_converter;
pub mod trip_list_ops;

pub use trip::Trip;
pub use trip_list_converter::TripListConverter;
