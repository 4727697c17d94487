mod enqueue;
mod ids;
mod track;

pub use enqueue::EnqueueBehaviour;
pub use ids::TrackId;
pub use track::Track;
