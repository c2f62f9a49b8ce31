use crate::utils::*;
use gloo::timers::callback::Timeout;
use hangman_core as game;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 2_000;

/// Result of applying one user action to the session.
#[derive(Clone, Debug, Default, PartialEq)]
struct Feedback {
    updated: bool,
    toast: Option<String>,
}

impl Feedback {
    fn rejected(err: game::GameError) -> Self {
        log::debug!("rejected: {}", err);
        Self {
            updated: false,
            toast: Some(err.to_string()),
        }
    }

    fn from_notice(updated: bool, notice: Option<game::Notice>) -> Self {
        if let Some(notice) = notice {
            log::debug!("notice: {:?}", notice);
        }
        Self {
            updated,
            toast: notice.map(|notice| notice.to_string()),
        }
    }
}

/// The game state together with the random source used by the letter-disabling hint.
#[derive(Clone, Debug)]
struct GameSession {
    game: game::GameState,
    rng: SmallRng,
}

impl GameSession {
    fn new(seed: u64, start_word: usize) -> Self {
        let game = game::GameState::starting_at(
            game::WordTable::builtin(),
            game::GameConfig::default(),
            start_word,
        );
        Self {
            game,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn guess(&mut self, letter: game::Letter) -> Feedback {
        match self.game.guess(letter) {
            Ok(report) => Feedback::from_notice(report.has_update(), report.notice),
            Err(err) => Feedback::rejected(err),
        }
    }

    fn use_hint(&mut self) -> Feedback {
        match self.game.use_hint(&mut self.rng) {
            Ok(report) => Feedback::from_notice(report.has_update(), report.notice),
            Err(err) => Feedback::rejected(err),
        }
    }

    fn new_game(&mut self) -> Feedback {
        self.game.advance();
        Feedback {
            updated: true,
            toast: None,
        }
    }
}

/// Maps a `KeyboardEvent.key` value to a letter, ignoring named keys like "Enter".
fn letter_from_key(key: &str) -> Option<game::Letter> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => game::Letter::try_from(ch).ok(),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Guess(game::Letter),
    UseHint,
    NewGame,
    DismissToast,
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
    /// Index of the word to start on
    #[prop_or_default]
    pub word: usize,
}

#[derive(Properties, Clone, PartialEq)]
struct HealthProps {
    health: game::Health,
}

#[function_component(HealthBar)]
fn health_bar(props: &HealthProps) -> Html {
    let game::Health { remaining, max } = props.health;
    let class = classes!("health", props.health.is_critical().then_some("critical"));
    let width = format!("width: {:.0}%", props.health.fraction() * 100.0);

    html! {
        <div {class} role="progressbar" aria-valuemin="0" aria-valuemax={max.to_string()} aria-valuenow={remaining.to_string()}>
            <div class="fill" style={width}/>
        </div>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    toast: Option<String>,
    toast_timeout: Option<Timeout>,
}

impl GameView {
    fn show_toast(&mut self, ctx: &Context<Self>, message: String) {
        let link = ctx.link().clone();
        self.toast_timeout = Some(Timeout::new(TOAST_MILLIS, move || {
            link.send_message(Msg::DismissToast)
        }));
        self.toast = Some(message);
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, word } = ctx.props().clone();
        Self {
            session: GameSession::new(seed.unwrap_or_else(js_random_seed), word),
            toast: None,
            toast_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let feedback = match msg {
            Guess(letter) => {
                log::debug!("guess: {}", letter);
                self.session.guess(letter)
            }
            UseHint => {
                log::debug!("hint requested");
                self.session.use_hint()
            }
            NewGame => {
                log::debug!("new game");
                self.session.new_game()
            }
            DismissToast => {
                self.toast_timeout = None;
                return self.toast.take().is_some();
            }
        };

        match feedback.toast {
            Some(message) => {
                self.show_toast(ctx, message);
                true
            }
            None => feedback.updated,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let view = self.session.game.view();
        let health = view.health();

        let onkeydown = ctx
            .link()
            .batch_callback(|e: KeyboardEvent| letter_from_key(&e.key()).map(Guess));
        let cb_hint = ctx.link().callback(|_: MouseEvent| UseHint);
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });

        html! {
            <div class="hangman" tabindex="0" {onkeydown}>
                <section class="puzzle">
                    <h1 class="word">{view.masked_word()}</h1>
                    <small>{view.turns_label()}</small>
                    <h2>{"Your HP"}</h2>
                    <HealthBar {health}/>
                </section>
                <h3>{"Choose the letter"}</h3>
                <nav class="letters">
                    {
                        for view.letter_keys().map(|key| {
                            let letter = key.letter;
                            let onclick = ctx.link().callback(move |_: MouseEvent| Guess(letter));
                            html! {
                                <button {onclick} disabled={!key.enabled}>{letter.to_string()}</button>
                            }
                        })
                    }
                </nav>
                if let Some(text) = view.hint_text() {
                    <p class="hint-text">{text.to_string()}</p>
                }
                if let Some(label) = view.hint_label() {
                    <button class="hint" onclick={cb_hint}>{label}</button>
                }
                <button class="new-game" onclick={cb_new_game}>{"New Game"}</button>
                if let Some(toast) = &self.toast {
                    <aside class="toast" role="status">{toast.clone()}</aside>
                }
            </div>
        }
    }
}
