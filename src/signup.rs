//! Signup Controller
//!
//! Handles the signup form: one API call, then an in-place patch of the
//! target card found through the name index built at render time.

use std::rc::Rc;

use crate::api::ActivityApi;
use crate::error::ClientResult;
use crate::notify::NotificationBanner;
use crate::participant::ParticipantRowController;
use crate::render::{ActivityCardRenderer, CardIndex};
use crate::surface::RenderSurface;

/// Banner text when a signup request never completes
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

pub struct SignupController<S: RenderSurface> {
    api: Rc<dyn ActivityApi>,
    renderer: Rc<ActivityCardRenderer<S>>,
    rows: Rc<ParticipantRowController<S>>,
    banner: Rc<NotificationBanner<S>>,
    cards: Rc<CardIndex<S::Node>>,
    form: S::Node,
}

impl<S: RenderSurface + 'static> SignupController<S> {
    pub fn new(
        api: Rc<dyn ActivityApi>,
        renderer: Rc<ActivityCardRenderer<S>>,
        rows: Rc<ParticipantRowController<S>>,
        banner: Rc<NotificationBanner<S>>,
        cards: Rc<CardIndex<S::Node>>,
        form: S::Node,
    ) -> Self {
        Self {
            api,
            renderer,
            rows,
            banner,
            cards,
            form,
        }
    }

    /// Sign `email` up for `activity`.
    ///
    /// The caller has already suppressed the browser's default submission.
    /// On success the form is reset, the card's counter drops by one and a
    /// wired row for `email` is appended. A card missing from the index is
    /// logged and left alone; the signup still counts as successful. On
    /// failure neither the card nor the form is touched.
    pub async fn on_submit(&self, activity: &str, email: &str) -> ClientResult<()> {
        match self.api.signup(activity, email).await {
            Ok(confirmation) => {
                self.renderer.surface().reset_form(&self.form);

                match self.cards.get(activity) {
                    Some(card) => {
                        let spots = self.renderer.adjust_spots(&card, -1);
                        let row = self.renderer.append_row(&card, email);
                        self.rows.wire(&card, row);
                        tracing::info!(activity, email, ?spots, "Participant signed up");
                    }
                    None => {
                        tracing::warn!(activity, email, "Signed up for an activity with no rendered card");
                    }
                }

                self.banner.success(&confirmation.message_or(|| {
                    format!("Signed up {} for {}", email, activity)
                }));
                Ok(())
            }
            Err(err) => {
                tracing::error!(activity, email, status = ?err.status(), error = %err, "Error signing up");
                self.banner.error(&err.user_message(SIGNUP_FAILED));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::model::Activity;
    use crate::notify::{NoticeKind, DEFAULT_TIMEOUT};
    use crate::render::Region;
    use crate::surface::{MemorySurface, NodeId};
    use crate::testing::{Call, ScriptedApi};
    use crate::timer::ManualTimer;

    struct Fixture {
        surface: Rc<MemorySurface>,
        api: Rc<ScriptedApi>,
        banner: Rc<NotificationBanner<MemorySurface>>,
        cards: Rc<CardIndex<NodeId>>,
        controller: SignupController<MemorySurface>,
    }

    fn fixture(activities: &[Activity]) -> Fixture {
        let surface = Rc::new(MemorySurface::new());
        let select = surface.create("select", "");
        let form = surface.create("form", "");
        let banner_node = surface.create("div", "hidden");
        let api = Rc::new(ScriptedApi::new(Default::default()));
        let api_dyn: Rc<dyn ActivityApi> = Rc::clone(&api) as Rc<dyn ActivityApi>;
        let renderer = Rc::new(ActivityCardRenderer::new(Rc::clone(&surface), select));
        let banner = Rc::new(NotificationBanner::new(
            Rc::clone(&surface),
            banner_node,
            Rc::new(ManualTimer::new()),
            DEFAULT_TIMEOUT,
        ));
        let rows = Rc::new(ParticipantRowController::new(
            Rc::clone(&api_dyn),
            Rc::clone(&renderer),
            Rc::clone(&banner),
        ));
        let cards = Rc::new(CardIndex::new());
        for activity in activities {
            let rendered = renderer.render(activity);
            for row in rendered.rows {
                rows.wire(&rendered.card, row);
            }
            cards.insert(rendered.card);
        }

        let controller = SignupController::new(
            api_dyn,
            renderer,
            rows,
            Rc::clone(&banner),
            Rc::clone(&cards),
            form,
        );

        Fixture {
            surface,
            api,
            banner,
            cards,
            controller,
        }
    }

    fn badges(f: &Fixture, activity: &str) -> Vec<String> {
        let card = f.cards.get(activity).unwrap();
        f.surface
            .find_by_class(*card.root(), "participant-badge")
            .into_iter()
            .map(|n| f.surface.text(&n))
            .collect()
    }

    fn counter_text(f: &Fixture, activity: &str) -> String {
        f.surface.text(f.cards.get(activity).unwrap().counter())
    }

    #[tokio::test]
    async fn test_signup_into_empty_state() {
        let f = fixture(&[Activity::new("Drama Club", 5)]);
        assert_eq!(counter_text(&f, "Drama Club"), "5 spots left");

        f.controller.on_submit("Drama Club", "b@x.com").await.unwrap();

        assert_eq!(counter_text(&f, "Drama Club"), "4 spots left");
        assert_eq!(badges(&f, "Drama Club"), vec!["b@x.com"]);
        let card = f.cards.get("Drama Club").unwrap();
        assert!(matches!(card.region(), Region::List(_)));
        assert!(f.surface.find_by_class(*card.root(), "participants-empty").is_empty());
        assert_eq!(f.surface.form_resets(), 1);

        let notice = f.banner.current();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Signed up b@x.com for Drama Club");
    }

    #[tokio::test]
    async fn test_signup_appends_last_row() {
        let f = fixture(&[Activity::new("Chess Club", 10).participant("a@x.com")]);

        f.controller.on_submit("Chess Club", "b@x.com").await.unwrap();

        assert_eq!(counter_text(&f, "Chess Club"), "8 spots left");
        assert_eq!(badges(&f, "Chess Club"), vec!["a@x.com", "b@x.com"]);
    }

    #[tokio::test]
    async fn test_new_row_removal_control_works() {
        let f = fixture(&[Activity::new("Drama Club", 5)]);
        f.controller.on_submit("Drama Club", "b@x.com").await.unwrap();

        let card = f.cards.get("Drama Club").unwrap();
        let control = f.surface.find_by_class(*card.root(), "delete-icon")[0];
        f.surface.click(control).unwrap().await;

        assert_eq!(
            f.api.calls().last(),
            Some(&Call::Unregister("Drama Club".into(), "b@x.com".into()))
        );
        assert_eq!(counter_text(&f, "Drama Club"), "5 spots left");
        assert!(matches!(card.region(), Region::Empty(_)));
    }

    #[tokio::test]
    async fn test_rejected_signup_leaves_card_and_form() {
        let f = fixture(&[Activity::new("Chess Club", 10).participant("a@x.com")]);
        f.api.reply(Err(ClientError::Api {
            status: 400,
            detail: Some("Student is already signed up".into()),
        }));

        let result = f.controller.on_submit("Chess Club", "a@x.com").await;
        assert!(result.is_err());

        assert_eq!(counter_text(&f, "Chess Club"), "9 spots left");
        assert_eq!(badges(&f, "Chess Club"), vec!["a@x.com"]);
        assert_eq!(f.surface.form_resets(), 0);
        let notice = f.banner.current();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Student is already signed up");
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        let f = fixture(&[Activity::new("Drama Club", 5)]);
        f.api.reply(Err(ClientError::Network("connection refused".into())));

        assert!(f.controller.on_submit("Drama Club", "b@x.com").await.is_err());

        assert_eq!(counter_text(&f, "Drama Club"), "5 spots left");
        assert!(matches!(f.cards.get("Drama Club").unwrap().region(), Region::Empty(_)));
        assert_eq!(f.surface.form_resets(), 0);
        assert_eq!(f.banner.current().text, SIGNUP_FAILED);
    }

    #[tokio::test]
    async fn test_unknown_card_still_succeeds() {
        let f = fixture(&[Activity::new("Drama Club", 5)]);

        f.controller.on_submit("Robotics", "b@x.com").await.unwrap();

        assert_eq!(counter_text(&f, "Drama Club"), "5 spots left");
        assert_eq!(f.surface.form_resets(), 1);
        assert_eq!(f.banner.current().kind, NoticeKind::Success);
    }
}
