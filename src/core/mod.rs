// Core Layer
pub mod actions;
pub mod deferred;
pub mod events;
pub mod observer;
