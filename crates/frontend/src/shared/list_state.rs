//! Состояние списка, загружаемого с сервера
//!
//! `Idle → Loading → {Populated | Empty}`; из `Populated`/`Empty` обратно в
//! `Loading` только по новому запросу. Каждый запрос получает номер
//! поколения, ответ устаревшего поколения отбрасывается.

/// Фаза списка
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Populated,
    Empty,
}

/// Результат загрузки: данных нет и загрузка не удалась различаются
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(Vec<T>),
    Empty,
    Failed(String),
}

impl<T> FetchOutcome<T> {
    pub fn from_result(result: Result<Vec<T>, String>) -> Self {
        match result {
            Ok(items) if items.is_empty() => FetchOutcome::Empty,
            Ok(items) => FetchOutcome::Loaded(items),
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

/// Номер поколения запроса
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug)]
pub struct ListState<T> {
    items: Vec<T>,
    phase: ListPhase,
    generation: u64,
    last_error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: ListPhase::Idle,
            generation: 0,
            last_error: None,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; the returned ticket must be handed back to [`Self::complete`]
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = ListPhase::Loading;
        FetchTicket(self.generation)
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and
    /// the outcome was discarded.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: FetchOutcome<T>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match outcome {
            FetchOutcome::Loaded(items) => {
                self.phase = if items.is_empty() {
                    ListPhase::Empty
                } else {
                    ListPhase::Populated
                };
                self.items = items;
                self.last_error = None;
            }
            FetchOutcome::Empty => {
                self.items.clear();
                self.phase = ListPhase::Empty;
                self.last_error = None;
            }
            FetchOutcome::Failed(e) => {
                self.items.clear();
                self.phase = ListPhase::Empty;
                self.last_error = Some(e);
            }
        }
        true
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// Ошибка последней загрузки (в UI показывается как пустой список)
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Empty-state placeholder is shown only after a fetch settled with no rows
    pub fn shows_empty_state(&self) -> bool {
        self.phase == ListPhase::Empty
    }
}
