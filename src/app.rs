use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    cmd::Cmd,
    config::Config,
    msg::Msg,
    presentation::{ClickAction, Components, HitMap, RenderMetrics},
    state::AppState,
    tui,
    update::update,
};

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub state: AppState,
    pub components: Components,
    pub hits: HitMap,
    pub last_tick_key_events: Vec<KeyEvent>,
    render_requested: bool,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;
        let state = AppState::with_config(config.clone());
        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            state,
            components: Components::new(),
            hits: HitMap::new(),
            last_tick_key_events: Vec::new(),
            render_requested: true,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate)
            .mouse(true);
        tui.enter()?;

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => msg_tx.send(Msg::Quit)?,
                    tui::Event::Tick => {
                        self.last_tick_key_events.drain(..);
                    }
                    tui::Event::Render => {
                        // Render requests are coalesced to the frame rate
                        if self.render_requested {
                            self.render(&mut tui, &msg_tx)?;
                        }
                    }
                    tui::Event::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        self.render(&mut tui, &msg_tx)?;
                    }
                    tui::Event::Key(key) => self.handle_key(key, &msg_tx)?,
                    tui::Event::Mouse(mouse) => {
                        if let Some(msg) = self.translate_mouse(mouse) {
                            msg_tx.send(msg)?;
                        }
                    }
                    _ => {}
                }
            }

            while let Ok(msg) = msg_rx.try_recv() {
                if !matches!(msg, Msg::MagnetShifted { .. } | Msg::ViewportMeasured { .. }) {
                    log::debug!("{msg:?}");
                }
                let (state, cmds) = update(msg, self.state.clone());
                self.state = state;
                for cmd in cmds {
                    self.execute(cmd);
                }
            }

            if self.state.system.should_suspend {
                tui.suspend()?;
                msg_tx.send(Msg::Resume)?;
                self.render_requested = true;
                tui = tui::Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate)
                    .mouse(true);
                tui.enter()?;
            } else if self.state.system.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, msg_tx: &mpsc::UnboundedSender<Msg>) -> Result<()> {
        if let Some(msg) = self.config.keybindings.get(&vec![key]) {
            log::info!("Got message: {msg:?}");
            msg_tx.send(msg.clone())?;
        } else {
            // If the key was not handled as a single key binding,
            // then consider it for multi-key combinations.
            self.last_tick_key_events.push(key);

            if let Some(msg) = self.config.keybindings.get(&self.last_tick_key_events) {
                log::info!("Got message: {msg:?}");
                msg_tx.send(msg.clone())?;
            }
        }
        Ok(())
    }

    /// Translate a raw mouse event into a semantic message via the hit map
    /// published by the last render.
    fn translate_mouse(&self, mouse: MouseEvent) -> Option<Msg> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .hits
                .action_at(mouse.column, mouse.row)
                .map(|action| match action {
                    ClickAction::Navigate(section) => Msg::Navigate(section),
                    ClickAction::ToggleMenu => Msg::ToggleMenu,
                    ClickAction::CloseMenu => Msg::CloseMenu,
                }),
            MouseEventKind::Moved => match self.hits.magnet_at(mouse.column, mouse.row) {
                Some((target, dx, dy)) => Some(Msg::MagnetShifted { target, dx, dy }),
                None if self.state.pointer.is_engaged() => Some(Msg::MagnetReleased),
                None => None,
            },
            MouseEventKind::ScrollDown => Some(Msg::ScrollDown),
            MouseEventKind::ScrollUp => Some(Msg::ScrollUp),
            _ => None,
        }
    }

    fn execute(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::RequestRender => self.render_requested = true,
            Cmd::LogInfo { message } => log::info!("{message}"),
            Cmd::LogError { message } => log::error!("{message}"),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
            Cmd::None => {}
        }
    }

    fn render(&mut self, tui: &mut tui::Tui, msg_tx: &mpsc::UnboundedSender<Msg>) -> Result<()> {
        self.render_requested = false;
        let state = &self.state;
        let components = &mut self.components;
        let hits = &mut self.hits;
        let mut metrics = RenderMetrics::default();
        tui.draw(|f| {
            metrics = components.render(f, state, hits);
        })?;

        if self.state.view.scroll.max_offset() != Some(metrics.max_scroll) {
            msg_tx.send(Msg::ViewportMeasured {
                max_scroll: metrics.max_scroll,
            })?;
        }
        Ok(())
    }
}
