use anyhow::Result;

use crate::{
    domain::shell_state::ShellState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        chats = context.store.list_chats().len(),
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_event_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    })?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Draws and dispatches events until the orchestrator stops running.
fn run_event_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            chat::ChatId,
            draft_state::DraftState,
            events::{AppEvent, KeyInput},
            workspace::WorkspaceState,
        },
        infra::{demo_sender::DemoSender, seed::demo_store},
        ui::event_source::MockEventSource,
        usecases::{send_message::SendPolicy, shell::DefaultShellOrchestrator},
    };

    fn orchestrator() -> DefaultShellOrchestrator<DemoSender> {
        let workspace = WorkspaceState::new(demo_store(), DraftState::default());
        DefaultShellOrchestrator::new(workspace, DemoSender, SendPolicy::default())
    }

    fn key(name: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(name, false))
    }

    #[test]
    fn loop_stops_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);
        let mut orchestrator = orchestrator();
        let mut frames = 0;

        run_event_loop(&mut source, &mut orchestrator, |_| {
            frames += 1;
            Ok(())
        })
        .expect("loop must finish");

        assert!(!orchestrator.state().is_running());
        assert_eq!(frames, 2);
    }

    #[test]
    fn loop_draws_state_after_each_event() {
        let mut source = MockEventSource::from(vec![
            key("/"),
            key("o"),
            key("p"),
            key("s"),
            key("enter"),
            key("enter"),
            key("q"),
        ]);
        let mut orchestrator = orchestrator();
        let mut last_query = String::new();

        run_event_loop(&mut source, &mut orchestrator, |state| {
            last_query = state.workspace().query().to_owned();
            Ok(())
        })
        .expect("loop must finish");

        assert_eq!(last_query, "ops");
        assert_eq!(
            orchestrator.state().workspace().active_chat_id(),
            Some(ChatId::from("c4"))
        );
    }

    #[test]
    fn draw_errors_abort_the_loop() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let mut orchestrator = orchestrator();

        let result = run_event_loop(&mut source, &mut orchestrator, |_| {
            Err(anyhow::anyhow!("terminal gone"))
        });

        assert!(result.is_err());
        assert!(orchestrator.state().is_running());
    }
}
