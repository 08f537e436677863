//! Scripted API and fixtures for unit tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::{ActivityApi, Confirmation};
use crate::error::{ClientError, ClientResult};
use crate::model::{Activity, Roster};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    FetchAll,
    Signup(String, String),
    Unregister(String, String),
}

/// Answers mutations from a queue, defaulting to the server's success message
pub(crate) struct ScriptedApi {
    roster: RefCell<ClientResult<Roster>>,
    replies: RefCell<VecDeque<ClientResult<Confirmation>>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedApi {
    pub(crate) fn new(roster: Roster) -> Self {
        Self {
            roster: RefCell::new(Ok(roster)),
            replies: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing_fetch(err: ClientError) -> Self {
        let api = Self::new(Roster::default());
        *api.roster.borrow_mut() = Err(err);
        api
    }

    pub(crate) fn reply(&self, reply: ClientResult<Confirmation>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next_reply(&self, default: String) -> ClientResult<Confirmation> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Confirmation::new(default)))
    }
}

#[async_trait(?Send)]
impl ActivityApi for ScriptedApi {
    async fn fetch_all(&self) -> ClientResult<Roster> {
        self.calls.borrow_mut().push(Call::FetchAll);
        self.roster.borrow().clone()
    }

    async fn signup(&self, activity: &str, email: &str) -> ClientResult<Confirmation> {
        self.calls
            .borrow_mut()
            .push(Call::Signup(activity.to_string(), email.to_string()));
        self.next_reply(format!("Signed up {} for {}", email, activity))
    }

    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<Confirmation> {
        self.calls
            .borrow_mut()
            .push(Call::Unregister(activity.to_string(), email.to_string()));
        self.next_reply(format!("Unregistered {} from {}", email, activity))
    }
}

pub(crate) fn sample_roster() -> Roster {
    Roster::new(vec![
        Activity::new("Chess Club", 10)
            .description("Learn strategies and compete in chess tournaments")
            .schedule("Fridays, 3:30 PM - 5:00 PM")
            .participant("a@x.com"),
        Activity::new("Drama Club", 5)
            .description("Acting and stagecraft")
            .schedule("Mondays, 4:00 PM - 5:30 PM"),
        Activity::new("Programming Class", 20)
            .description("Learn programming fundamentals")
            .schedule("Tuesdays and Thursdays, 3:30 PM - 4:30 PM")
            .participant("emma@mergington.edu")
            .participant("sophia@mergington.edu"),
    ])
}
