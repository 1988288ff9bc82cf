//! Test Doubles
//!
//! In-memory repository with failure injection, and a virtual clock.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::domain::{NewTodo, RepoError, RepoResult, Todo, TodoPatch};
use crate::repository::TodoRepository;
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct FakeState {
    todos: RefCell<Vec<Todo>>,
    next_id: Cell<u32>,
    /// `(op, None)` fails every call of that op
    failing: RefCell<HashSet<(Op, Option<u32>)>>,
    calls: RefCell<Vec<(Op, u32)>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

/// Shared handle: the store owns one clone, the test keeps another
#[derive(Clone, Default)]
pub struct FakeRepository {
    inner: Rc<FakeState>,
}

impl FakeRepository {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let repo = Self::default();
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        repo.inner.next_id.set(next_id.max(100));
        *repo.inner.todos.borrow_mut() = todos;
        repo
    }

    pub fn fail_on(&self, op: Op, id: u32) {
        self.inner.failing.borrow_mut().insert((op, Some(id)));
    }

    pub fn fail_all(&self, op: Op) {
        self.inner.failing.borrow_mut().insert((op, None));
    }

    pub fn heal(&self) {
        self.inner.failing.borrow_mut().clear();
    }

    /// Block the next call until the returned sender fires (or is dropped)
    pub fn hold(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.inner.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<(Op, u32)> {
        self.inner.calls.borrow().clone()
    }

    pub fn stored(&self) -> Vec<Todo> {
        self.inner.todos.borrow().clone()
    }

    async fn enter(&self, op: Op, id: u32) -> RepoResult<()> {
        self.inner.calls.borrow_mut().push((op, id));

        let gate = self.inner.gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }

        let failing = self.inner.failing.borrow();
        if failing.contains(&(op, None)) || failing.contains(&(op, Some(id))) {
            return Err(RepoError::Transport(format!("injected {:?} failure", op)));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoRepository for FakeRepository {
    async fn list(&self, user_id: u32) -> RepoResult<Vec<Todo>> {
        self.enter(Op::List, user_id).await?;
        Ok(self
            .inner
            .todos
            .borrow()
            .iter()
            .filter(|todo| todo.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, todo: &NewTodo) -> RepoResult<Todo> {
        self.enter(Op::Create, 0).await?;
        let id = self.inner.next_id.get().max(1);
        self.inner.next_id.set(id + 1);

        let created = Todo {
            id,
            user_id: todo.user_id,
            title: todo.title.clone(),
            completed: todo.completed,
        };
        self.inner.todos.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: u32, patch: &TodoPatch) -> RepoResult<Todo> {
        self.enter(Op::Update, id).await?;
        let mut todos = self.inner.todos.borrow_mut();
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(RepoError::Status { status: 404 })?;
        todo.apply(patch);
        Ok(todo.clone())
    }

    async fn delete(&self, id: u32) -> RepoResult<()> {
        self.enter(Op::Delete, id).await?;
        let mut todos = self.inner.todos.borrow_mut();
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        if todos.len() == before {
            return Err(RepoError::Status { status: 404 });
        }
        Ok(())
    }
}

struct Timer {
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    timers: Vec<Timer>,
}

/// Virtual clock; timers only fire from `advance`
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move time forward, firing due timers in order
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let earliest = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| timer.due)
                    .map(|(index, _)| index);
                earliest.map(|index| {
                    let timer = clock.timers.remove(index);
                    clock.now = timer.due;
                    timer.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.timers.push(Timer { due, task });
    }
}
