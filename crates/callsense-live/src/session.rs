//! Timer-driven live call session
//!
//! A session runs two cadences: a clock tick incrementing the elapsed
//! counter, and a slower transcript tick replaying the next scripted line
//! stamped with the current clock. Ordering between the two cadences at
//! coinciding deadlines is scheduler-determined and deliberately
//! unspecified.

use crate::error::{SessionError, SessionResult};
use crate::script::LiveScript;
use callsense_core::config::LiveConfig;
use callsense_core::sentiment::overall_sentiment;
use callsense_core::utils::format_clock;
use callsense_core::{OverallSentiment, TranscriptLine};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Lifecycle phase of a live session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No session has run yet
    #[default]
    Idle,
    /// Clock and transcript feed are live
    Running,
    /// Clock and transcript feed are frozen
    Paused,
    /// Session finished; transcript stays visible until the next start
    Ended,
}

#[derive(Debug, Default)]
struct SessionState {
    phase: SessionPhase,
    elapsed_seconds: u64,
    transcript: Vec<TranscriptLine>,
    overall: Option<OverallSentiment>,
    cursor: usize,
}

/// Simulated live call with a running clock and scripted transcript feed
#[derive(Debug)]
pub struct LiveSession {
    config: LiveConfig,
    script: Arc<LiveScript>,
    state: Arc<RwLock<SessionState>>,
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl LiveSession {
    /// Create a session over a script
    #[must_use]
    pub fn new(config: LiveConfig, script: LiveScript) -> Self {
        Self {
            config,
            script: Arc::new(script),
            state: Arc::new(RwLock::new(SessionState::default())),
            cancel: CancellationToken::new(),
            tasks: Vec::new(),
        }
    }

    /// Create a session over the demo script with default cadences
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LiveConfig::default(), LiveScript::default())
    }

    /// Start a fresh session
    ///
    /// Clears the transcript, zeroes the clock and begins both cadences.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyRunning`] if a session is running or
    /// paused.
    pub async fn start(&mut self) -> SessionResult<()> {
        {
            let mut state = self.state.write().await;
            if matches!(state.phase, SessionPhase::Running | SessionPhase::Paused) {
                return Err(SessionError::AlreadyRunning);
            }

            state.phase = SessionPhase::Running;
            state.elapsed_seconds = 0;
            state.transcript.clear();
            state.overall = None;
            state.cursor = 0;
        }

        self.cancel = CancellationToken::new();
        let clock = self.spawn_clock_tick();
        let feed = self.spawn_transcript_tick();
        self.tasks.push(clock);
        self.tasks.push(feed);

        info!(script_lines = self.script.len(), "live session started");
        Ok(())
    }

    /// Freeze the clock and the transcript feed
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotRunning`] unless the session is running.
    pub async fn pause(&self) -> SessionResult<()> {
        let mut state = self.state.write().await;
        if state.phase != SessionPhase::Running {
            return Err(SessionError::NotRunning);
        }

        state.phase = SessionPhase::Paused;
        debug!(elapsed = state.elapsed_seconds, "live session paused");
        Ok(())
    }

    /// Release a paused session
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotPaused`] unless the session is paused.
    pub async fn resume(&self) -> SessionResult<()> {
        let mut state = self.state.write().await;
        if state.phase != SessionPhase::Paused {
            return Err(SessionError::NotPaused);
        }

        state.phase = SessionPhase::Running;
        debug!(elapsed = state.elapsed_seconds, "live session resumed");
        Ok(())
    }

    /// End the session
    ///
    /// Cancels both cadences and zeroes the clock; the accumulated
    /// transcript stays visible until the next start.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotRunning`] unless the session is running or
    /// paused.
    pub async fn end(&mut self) -> SessionResult<()> {
        {
            let state = self.state.read().await;
            if !matches!(state.phase, SessionPhase::Running | SessionPhase::Paused) {
                return Err(SessionError::NotRunning);
            }
        }

        self.cancel.cancel();
        for task in self.tasks.drain(..) {
            let _ = task.await;
        }

        let mut state = self.state.write().await;
        state.phase = SessionPhase::Ended;
        state.elapsed_seconds = 0;
        info!(lines = state.transcript.len(), "live session ended");
        Ok(())
    }

    /// Current lifecycle phase
    pub async fn phase(&self) -> SessionPhase {
        self.state.read().await.phase
    }

    /// Elapsed unpaused seconds
    pub async fn elapsed_seconds(&self) -> u64 {
        self.state.read().await.elapsed_seconds
    }

    /// Elapsed clock formatted as `mm:ss` (or `hh:mm:ss` past an hour)
    pub async fn elapsed_display(&self) -> String {
        format_clock(self.state.read().await.elapsed_seconds)
    }

    /// Snapshot of the accumulated transcript
    pub async fn transcript(&self) -> Vec<TranscriptLine> {
        self.state.read().await.transcript.clone()
    }

    /// Derived verdict over the accumulated transcript, if any lines played
    pub async fn overall_sentiment(&self) -> Option<OverallSentiment> {
        self.state.read().await.overall
    }

    /// The script this session replays
    #[must_use]
    pub fn script(&self) -> &LiveScript {
        &self.script
    }

    fn spawn_clock_tick(&self) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let cancel = self.cancel.clone();
        let period = Duration::from_secs(self.config.clock_tick_secs);

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    () = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        let mut state = state.write().await;
                        if state.phase == SessionPhase::Running {
                            state.elapsed_seconds += 1;
                        }
                    }
                }
            }
        })
    }

    fn spawn_transcript_tick(&self) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let script = Arc::clone(&self.script);
        let cancel = self.cancel.clone();
        let period = Duration::from_secs(self.config.transcript_tick_secs);

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    () = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        let mut state = state.write().await;
                        if state.phase != SessionPhase::Running {
                            continue;
                        }

                        let Some(line) = script.get(state.cursor) else {
                            break;
                        };

                        let stamp = format_clock(state.elapsed_seconds);
                        debug!(cursor = state.cursor, %stamp, "transcript line played");
                        state.transcript.push(TranscriptLine::new(
                            line.speaker,
                            line.text.clone(),
                            line.score,
                            stamp,
                        ));
                        state.cursor += 1;
                        state.overall = overall_sentiment(&state.transcript);

                        // The feed stops itself once the script is exhausted
                        if state.cursor >= script.len() {
                            break;
                        }
                    }
                }
            }
        })
    }
}

impl Drop for LiveSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::script::ScriptLine;
    use callsense_core::Speaker;
    use pretty_assertions::assert_eq;

    /// Advance virtual time one second at a time, letting the tick tasks run
    ///
    /// Yields before each step so freshly spawned tick tasks register their
    /// timers before the clock moves, and after it so due ticks are handled.
    async fn advance_secs(n: u64) {
        for _ in 0..n {
            for _ in 0..4 {
                tokio::task::yield_now().await;
            }
            tokio::time::advance(Duration::from_secs(1)).await;
            for _ in 0..4 {
                tokio::task::yield_now().await;
            }
        }
    }

    fn short_script() -> LiveScript {
        LiveScript::new(vec![
            ScriptLine::new(Speaker::Agent, "Hello!", 0.8),
            ScriptLine::new(Speaker::Customer, "This is not working.", 0.2),
        ])
    }

    fn fast_config() -> LiveConfig {
        LiveConfig {
            clock_tick_secs: 1,
            transcript_tick_secs: 1,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_increments_per_unpaused_second() {
        let mut session = LiveSession::with_defaults();
        session.start().await.unwrap();
        assert_eq!(session.phase().await, SessionPhase::Running);
        assert_eq!(session.elapsed_seconds().await, 0);

        advance_secs(1).await;
        assert_eq!(session.elapsed_seconds().await, 1);

        advance_secs(2).await;
        assert_eq!(session.elapsed_seconds().await, 3);
        assert_eq!(session.elapsed_display().await, "00:03");
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_line_per_transcript_tick_in_script_order() {
        let mut session = LiveSession::with_defaults();
        session.start().await.unwrap();

        let mut previous = 0;
        for _ in 0..30 {
            advance_secs(1).await;
            let transcript = session.transcript().await;
            assert!(transcript.len() <= previous + 1, "more than one line per tick");
            previous = transcript.len();
        }

        // Default script exhausted after 6 ticks of 4 seconds
        let transcript = session.transcript().await;
        assert_eq!(transcript.len(), session.script().len());
        for (index, line) in transcript.iter().enumerate() {
            let scripted = session.script().get(index).unwrap();
            assert_eq!(line.text, scripted.text);
            assert_eq!(line.speaker, scripted.speaker.to_string());
        }

        // Exhausted feed stays exhausted
        advance_secs(8).await;
        assert_eq!(session.transcript().await.len(), session.script().len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_line_stamped_with_current_clock() {
        let mut session = LiveSession::with_defaults();
        session.start().await.unwrap();

        advance_secs(4).await;
        let transcript = session.transcript().await;
        assert_eq!(transcript.len(), 1);
        // The 1 s and 4 s ticks share the t=4 deadline; either ordering is
        // acceptable for a display-only clock stamp.
        assert!(
            ["00:03", "00:04"].contains(&transcript[0].time.as_str()),
            "unexpected stamp {}",
            transcript[0].time
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_freezes_clock_and_feed() {
        let mut session = LiveSession::with_defaults();
        session.start().await.unwrap();

        advance_secs(2).await;
        session.pause().await.unwrap();
        assert_eq!(session.phase().await, SessionPhase::Paused);

        advance_secs(10).await;
        assert_eq!(session.elapsed_seconds().await, 2);
        assert!(session.transcript().await.is_empty());

        session.resume().await.unwrap();
        advance_secs(1).await;
        assert_eq!(session.elapsed_seconds().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_resets_clock_keeps_transcript() {
        let mut session = LiveSession::with_defaults();
        session.start().await.unwrap();

        advance_secs(5).await;
        assert_eq!(session.transcript().await.len(), 1);

        session.end().await.unwrap();
        assert_eq!(session.phase().await, SessionPhase::Ended);
        assert_eq!(session.elapsed_seconds().await, 0);
        assert_eq!(session.transcript().await.len(), 1);

        // Ended sessions restart cleanly
        session.start().await.unwrap();
        assert_eq!(session.phase().await, SessionPhase::Running);
        assert!(session.transcript().await.is_empty());
        assert!(session.overall_sentiment().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overall_sentiment_tracks_transcript() {
        let mut session = LiveSession::new(fast_config(), short_script());
        session.start().await.unwrap();
        assert_eq!(session.overall_sentiment().await, None);

        advance_secs(1).await;
        // One line at 0.8
        assert_eq!(
            session.overall_sentiment().await,
            Some(OverallSentiment::Satisfied)
        );

        advance_secs(1).await;
        // Mean of 0.8 and 0.2 is exactly 0.5
        assert_eq!(
            session.overall_sentiment().await,
            Some(OverallSentiment::Neutral)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_while_running_is_refused() {
        let mut session = LiveSession::with_defaults();
        session.start().await.unwrap();
        assert_eq!(session.start().await, Err(SessionError::AlreadyRunning));

        session.pause().await.unwrap();
        assert_eq!(session.start().await, Err(SessionError::AlreadyRunning));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifecycle_guards() {
        let mut session = LiveSession::with_defaults();
        assert_eq!(session.pause().await, Err(SessionError::NotRunning));
        assert_eq!(session.resume().await, Err(SessionError::NotPaused));
        assert_eq!(session.end().await, Err(SessionError::NotRunning));

        session.start().await.unwrap();
        assert_eq!(session.resume().await, Err(SessionError::NotPaused));
    }
}
