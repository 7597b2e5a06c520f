use yew::prelude::*;

use quizzo_core::{Board, BoardConfig, CellCoords, Clue, GameError, RevealState, build_board};

use crate::provider::HttpCategorySource;
use crate::utils::js_random_seed;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    NewGame,
    BoardReady {
        epoch: u32,
        result: Result<Board, GameError>,
    },
    CellActivated(CellCoords),
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    #[prop_or_default]
    pub config: BoardConfig,
    #[prop_or(AttrValue::Static(HttpCategorySource::DEFAULT_BASE_URL))]
    pub provider: AttrValue,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    col: usize,
    row: usize,
    clue: Clue,
    callback: Callback<CellCoords>,
}

#[function_component(Cell)]
fn cell_component(props: &CellProps) -> Html {
    use RevealState::*;

    let CellProps {
        col,
        row,
        clue,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        match clue.state() {
            Hidden => "covered",
            Question => "question",
            Answer => "answer",
        }
    );

    let text = match clue.state() {
        Hidden => "?",
        Question => clue.question(),
        Answer => clue.answer(),
    }
    .to_string();

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("({}, {}) activated", col, row);
        callback.emit((col, row));
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

pub(crate) struct GameView {
    source: HttpCategorySource,
    board: Option<Board>,
    error: Option<GameError>,
    loading: bool,
    epoch: u32,
}

impl GameView {
    fn start_build(&mut self, ctx: &Context<Self>) {
        self.loading = true;
        self.error = None;
        self.epoch += 1;

        let epoch = self.epoch;
        let source = self.source.clone();
        let config = ctx.props().config;
        let seed = js_random_seed();
        log::debug!("Building board, epoch {} seed {}", epoch, seed);
        ctx.link().send_future(async move {
            let result = build_board(&source, config, seed).await;
            Msg::BoardReady { epoch, result }
        });
    }

    fn phase_class(&self) -> Classes {
        classes!(if self.loading {
            "loading"
        } else if self.error.is_some() {
            "failed"
        } else if self.board.is_some() {
            "ready"
        } else {
            "idle"
        })
    }

    fn board_table(&self, ctx: &Context<Self>, board: &Board) -> Html {
        let (cols, rows) = board.size();
        html! {
            <table>
                <thead>
                    <tr>
                        {
                            for board.columns().iter().map(|category| html! {
                                <th>{category.title().to_uppercase()}</th>
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let clue = board.clue_at((col, row)).clone();
                                        let callback = ctx.link().callback(Msg::CellActivated);
                                        html! {
                                            <Cell {col} {row} {clue} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            source: HttpCategorySource::new(ctx.props().provider.to_string()),
            board: None,
            error: None,
            loading: false,
            epoch: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            NewGame => {
                if self.loading {
                    log::debug!("Ignoring new game request while a build is in flight");
                    return false;
                }
                self.start_build(ctx);
                true
            }
            BoardReady { epoch, result } => {
                if epoch != self.epoch {
                    log::debug!(
                        "Discarding stale board build, epoch {} superseded by {}",
                        epoch,
                        self.epoch
                    );
                    return false;
                }
                self.loading = false;
                match result {
                    Ok(board) => {
                        self.board = Some(board);
                        self.error = None;
                    }
                    Err(err) => {
                        log::error!("Could not build board: {}", err);
                        self.board = None;
                        self.error = Some(err);
                    }
                }
                true
            }
            CellActivated(coords) => match self.board.as_mut().map(|board| board.activate(coords))
            {
                Some(Ok(outcome)) => outcome.has_update(),
                Some(Err(err)) => {
                    log::warn!("Ignoring activation at {:?}: {}", coords, err);
                    false
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let phase_class = self.phase_class();
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let start_label = if self.board.is_some() {
            "Restart"
        } else {
            "Start"
        };

        html! {
            <div class={classes!("quizzo", phase_class)}>
                <nav>
                    <button onclick={cb_new_game} disabled={self.loading}>{start_label}</button>
                </nav>
                if self.loading {
                    <p class="board-loading">{"Loading..."}</p>
                }
                if let Some(error) = &self.error {
                    <p class="board-error">{error.to_string()}</p>
                }
                if let Some(board) = &self.board {
                    { self.board_table(ctx, board) }
                }
            </div>
        }
    }
}
