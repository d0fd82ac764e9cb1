use crate::{
    cmd::Cmd,
    msg::Msg,
    state::{pointer, system, view, AppState},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Session control (delegated to SystemState)
        Msg::Quit => {
            state.system.update(system::Message::QuitRequested);
            (state, vec![])
        }

        Msg::Suspend => {
            state.system.update(system::Message::SuspendRequested);
            (state, vec![])
        }

        Msg::Resume => {
            state.system.update(system::Message::Resumed);
            (state, vec![Cmd::RequestRender])
        }

        Msg::Error(message) => {
            state
                .system
                .update(system::Message::StatusMessageSet(message.clone()));
            (state, vec![Cmd::LogError { message }, Cmd::RequestRender])
        }

        // Navigation (delegated to ViewState)
        Msg::Navigate(section) => {
            state.view.update(view::Message::SectionSelected(section));
            // Whatever the pointer was following is gone or moved now
            state.pointer.update(pointer::Message::Released);
            let log = Cmd::LogInfo {
                message: format!("navigated to {section}"),
            };
            (state, vec![log, Cmd::RequestRender])
        }

        Msg::ToggleMenu => {
            state.view.update(view::Message::MenuToggled);
            state.pointer.update(pointer::Message::Released);
            (state, vec![Cmd::RequestRender])
        }

        Msg::CloseMenu => {
            state.view.update(view::Message::MenuClosed);
            state.pointer.update(pointer::Message::Released);
            (state, vec![Cmd::RequestRender])
        }

        // Scrolling (delegated to ViewState)
        Msg::ScrollUp => {
            state.view.update(view::Message::ScrolledUp);
            (state, vec![Cmd::RequestRender])
        }

        Msg::ScrollDown => {
            state.view.update(view::Message::ScrolledDown);
            (state, vec![Cmd::RequestRender])
        }

        Msg::ScrollToTop => {
            state.view.update(view::Message::ScrolledToTop);
            (state, vec![Cmd::RequestRender])
        }

        Msg::ScrollToBottom => {
            state.view.update(view::Message::ScrolledToBottom);
            (state, vec![Cmd::RequestRender])
        }

        Msg::ScrollTo(offset) => {
            state.view.update(view::Message::ScrolledTo(offset));
            (state, vec![Cmd::RequestRender])
        }

        // Pointer follow (delegated to PointerState)
        Msg::MagnetShifted { target, dx, dy } => {
            let before = state.pointer.engagement();
            state
                .pointer
                .update(pointer::Message::Shifted { target, dx, dy });
            if state.pointer.engagement() == before {
                // Same cell as last time; nothing to redraw
                (state, vec![])
            } else {
                (state, vec![Cmd::RequestRender])
            }
        }

        Msg::MagnetReleased => {
            if state.pointer.is_engaged() {
                state.pointer.update(pointer::Message::Released);
                (state, vec![Cmd::RequestRender])
            } else {
                (state, vec![])
            }
        }

        // Presentation feedback
        Msg::ViewportMeasured { max_scroll } => {
            let before = state.view.scroll.offset();
            state.view.update(view::Message::MaxScrollChanged(max_scroll));
            if state.view.scroll.offset() == before {
                (state, vec![])
            } else {
                // The clamp moved the viewport; show it
                (state, vec![Cmd::RequestRender])
            }
        }

        Msg::StatusMessage(message) => {
            state
                .system
                .update(system::Message::StatusMessageSet(message));
            (state, vec![Cmd::RequestRender])
        }
    }
}
