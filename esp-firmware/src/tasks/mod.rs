// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig. HTTP-Tasks und der
// Animations-Task teilen sich ausschließlich die PatternCell.

pub mod animation;
pub mod http;
pub mod mdns;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use animation::animation_task;
pub use http::http_server_task;
pub use mdns::mdns_responder_task;
pub use wifi::{connection_task, dhcp_task, net_task};
