//! Remote sheet synchronization: push the activity log, pull warehouse stock.

mod client;
mod error;
mod wire;
mod worker;

pub use client::{stock_url, SyncClient, STOCK_QUERY_KEY, STOCK_QUERY_VALUE};
pub use error::SyncError;
pub use wire::{
    decode_push_response, decode_stock_response, PushReceipt, PushRequest, DEFAULT_PUSH_MESSAGE,
    DEFAULT_REJECT_MESSAGE, DEFAULT_STOCK_FORMAT_MESSAGE,
};
pub use worker::{
    command_channel, spawn_worker, SyncCommand, SyncCommandSender, SyncEvent,
};
