use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::{sync::mpsc, sync::Mutex, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{ballot::BallotMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::wallet::WalletProvider,
    infrastructure::{
        ballot_service::BallotService,
        config::Config,
        tui::{Event, TuiLike},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime against a terminal and the ballot service.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike>>,
    renderer: Renderer,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    service: Option<BallotService>,
    service_handle: Option<JoinHandle<()>>,
    cancel_token: CancellationToken,
}

impl AppRunner {
    /// Wires runtime, service and terminal. `wallet` is `None` when no wallet
    /// is configured; the first load then reports it as missing.
    pub fn new(
        config: Config,
        wallet: Option<Arc<dyn WalletProvider>>,
        tui: Arc<Mutex<dyn TuiLike>>,
    ) -> Self {
        let contract_address = config.contract_address.clone();
        let mut runtime = Runtime::new(AppState::new_with_config(config));

        let (op_tx, cancel_token, service) =
            BallotService::new(wallet, contract_address, runtime.get_raw_sender());
        runtime.add_ballot_sender(op_tx);

        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx);

        Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            tui_rx,
            service: Some(service),
            service_handle: None,
            cancel_token,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Run until quit or until the terminal stops producing events.
    pub async fn run(&mut self) -> Result<()> {
        if let Some(service) = self.service.take() {
            self.service_handle = Some(service.run());
        }
        self.tui.lock().await.enter()?;

        // Load on start
        self.runtime.send_msg(Msg::Ballot(BallotMsg::Load));
        self.cycle().await?;

        loop {
            let event = self.tui.lock().await.next().await;
            match event {
                Some(event) => self.handle_event(event),
                None => self.runtime.send_raw_msg(RawMsg::Quit),
            }

            self.cycle().await?;

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.shutdown().await
    }

    fn handle_event(&mut self, event: Event) {
        let raw = match event {
            Event::Quit | Event::Closed => RawMsg::Quit,
            Event::Tick => RawMsg::Tick,
            Event::Render => RawMsg::Render,
            Event::Resize(w, h) => RawMsg::Resize(w, h),
            Event::Key(key) => RawMsg::Key(key),
            Event::Error => RawMsg::Error("Terminal input error".to_string()),
            Event::Init | Event::FocusGained | Event::FocusLost => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    /// One update cycle: translate, update, execute, apply terminal commands, draw.
    async fn cycle(&mut self) -> Result<()> {
        for line in self.runtime.run_update_cycle() {
            if line.starts_with('✗') {
                log::warn!("{line}");
            }
        }

        while let Ok(tui_cmd) = self.tui_rx.try_recv() {
            match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
            }
        }

        self.renderer
            .render(&self.tui, self.runtime.state())
            .await
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.cancel_token.cancel();
        if let Some(handle) = self.service_handle.take() {
            if let Err(e) = handle.await {
                log::error!("BallotService task failed: {e}");
            }
        }
        self.tui.lock().await.exit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    fn runner_with(events: Vec<Event>) -> (AppRunner, Arc<Mutex<TestTui>>) {
        let test_tui = Arc::new(Mutex::new(TestTui::with_events(80, 24, events).unwrap()));
        let tui: Arc<Mutex<dyn TuiLike>> = Arc::clone(&test_tui) as _;
        let runner = AppRunner::new(Config::defaults().unwrap(), None, tui);
        (runner, test_tui)
    }

    #[tokio::test]
    async fn test_quit_key_stops_runner() {
        let (mut runner, test_tui) = runner_with(vec![Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::empty(),
        ))]);

        runner.run().await.unwrap();

        assert!(runner.runtime().state().system.should_quit);
        assert!(test_tui.lock().await.draw_count() >= 2);
    }

    #[tokio::test]
    async fn test_closed_input_stops_runner() {
        let (mut runner, _) = runner_with(vec![]);

        runner.run().await.unwrap();

        assert!(runner.runtime().state().system.should_quit);
    }

    #[tokio::test]
    async fn test_resize_event_resizes_terminal() {
        let (mut runner, test_tui) = runner_with(vec![Event::Resize(100, 30)]);

        runner.run().await.unwrap();

        let guard = test_tui.lock().await;
        assert_eq!(guard.screen_lines().len(), 30);
        assert_eq!(guard.screen_lines()[0].chars().count(), 100);
    }
}
