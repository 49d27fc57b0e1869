use super::*;

mod require_authenticated;
mod require_event_manage;
mod require_record_owner;
