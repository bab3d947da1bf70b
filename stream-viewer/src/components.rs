pub mod connector;
pub mod message_card;
pub mod stream_panel;
pub mod stream_view;
pub mod styles;

pub use connector::{ArrowheadDefs, CausationConnector};
pub use message_card::MessageCard;
pub use stream_panel::StreamNamePanel;
pub use stream_view::StreamView;
