pub mod dispatcher;
pub mod gestures;
pub mod types;

pub use dispatcher::PointerDispatcher;
pub use types::{
    PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId, PointerPhase,
};

pub mod prelude {
    pub use super::dispatcher::PointerDispatcher;
    pub use super::types::{
        PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId, PointerPhase,
    };
}
