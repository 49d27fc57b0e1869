mod auth;
mod event;
mod inscription;
mod maintenance;
mod organizer;
