//! Game loop: owns the session state and drives the state machine one tick
//! at a time

use game_core::{
    ingest_inputs, step, Config, Events, GameRng, GameState, InputQueue, Score, Side,
};

use crate::error::ClientError;
use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::input::{map_event, EventSource, InputAction};
use crate::pacer::Pacer;
use crate::renderer::draw::{draw_background, draw_banner, draw_objects, Banner};
use crate::renderer::{Surface, TextRenderer};

/// Round won on the last point, announced once the serve pause runs out
#[derive(Debug, Clone, Copy)]
struct FinalPoint {
    winner: Side,
    /// Score as it stood on the winning point, shown until the banner
    score: Score,
}

pub struct App<S, E, P> {
    config: Config,
    surface: S,
    events: E,
    pacer: P,
    fsm: GameFsm,
    state: GameState,
    input: InputQueue,
    tick_events: Events,
    banner_ticks_left: u32,
    final_point: Option<FinalPoint>,
}

impl<S, E, P> App<S, E, P>
where
    S: Surface + TextRenderer,
    E: EventSource,
    P: Pacer,
{
    pub fn new(config: Config, surface: S, events: E, pacer: P, rng: &mut GameRng) -> Self {
        let state = GameState::new(&config, rng);
        Self {
            config,
            surface,
            events,
            pacer,
            fsm: GameFsm::new(),
            state,
            input: InputQueue::new(),
            tick_events: Events::new(),
            banner_ticks_left: 0,
            final_point: None,
        }
    }

    /// Run ticks until the goodbye screen has finished
    pub fn run(&mut self) -> Result<(), ClientError> {
        while !self.fsm.is_terminated() {
            self.tick()?;
        }
        Ok(())
    }

    /// One pass of the loop: poll input, advance the current state, present,
    /// then wait out the rest of the tick
    pub fn tick(&mut self) -> Result<(), ClientError> {
        if self.fsm.state() == FsmState::Init {
            self.enter(GameAction::Start);
        }

        let actions: Vec<InputAction> = self.events.poll()?.iter().filter_map(map_event).collect();
        if actions.contains(&InputAction::Quit) && self.fsm.accepts_quit() {
            self.enter(GameAction::Quit);
        }

        match self.fsm.state() {
            FsmState::Welcome => self.show_banner(Banner::Welcome),
            FsmState::Winner(side) => self.show_banner(Banner::Winner(side)),
            FsmState::Goodbye => self.show_banner(Banner::Goodbye),
            FsmState::Playing => self.play(&actions),
            FsmState::Init | FsmState::Terminated => {}
        }

        self.surface.present()?;
        self.pacer.wait();
        Ok(())
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn game(&self) -> &GameState {
        &self.state
    }

    /// Transition and arm the banner timer when the new state is a banner
    fn enter(&mut self, action: GameAction) {
        let result = self.fsm.transition(action);
        if result.success && self.fsm.is_banner() {
            self.banner_ticks_left = self.config.banner_ticks().max(1);
        }
    }

    /// Draw the banner and count down its remaining ticks
    fn show_banner(&mut self, banner: Banner) {
        draw_banner(&mut self.surface, &self.state.map, banner);
        self.banner_ticks_left = self.banner_ticks_left.saturating_sub(1);
        if self.banner_ticks_left == 0 {
            self.enter(GameAction::BannerDone);
        }
    }

    fn play(&mut self, actions: &[InputAction]) {
        for action in actions {
            if let InputAction::Move(command) = action {
                self.input.push(*command);
            }
        }
        ingest_inputs(&mut self.state, &mut self.input, self.config.paddle_step);

        let score = self.final_point.map_or(self.state.score, |point| point.score);
        draw_background(&mut self.surface, &self.state.map, &score);
        draw_objects(&mut self.surface, &self.state);

        let mut before = self.state.score;
        if let Some(winner) = step(&mut self.state, &self.config, &mut self.tick_events) {
            before.increment(winner);
            self.final_point = Some(FinalPoint {
                winner,
                score: before,
            });
        } else if let Some(scorer) = self.tick_events.scored {
            tracing::info!(
                player = scorer.player_number(),
                left = self.state.score.left,
                right = self.state.score.right,
                "score"
            );
        }

        // The ball is held at the center after the winning point, then the
        // round is announced
        if let Some(point) = self.final_point {
            if !self.state.serve.is_active() {
                self.final_point = None;
                self.enter(GameAction::Won(point.winner));
            }
        }
    }
}
