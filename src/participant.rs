//! Participant Row Controller
//!
//! Behavior behind each row's removal control: unregister, then patch the
//! one card in place. Removals on the same card may be in flight together;
//! each one reads the counter and the row count live when its response
//! arrives, so completion order does not matter.

use futures_util::future::LocalBoxFuture;
use std::rc::Rc;

use crate::api::ActivityApi;
use crate::error::ClientResult;
use crate::notify::NotificationBanner;
use crate::render::{ActivityCardRenderer, CardHandle, RowHandle};
use crate::surface::{ClickHandler, RenderSurface};

/// Banner text when an unregister request never completes
pub const UNREGISTER_FAILED: &str = "Failed to unregister participant. Please try again.";

pub struct ParticipantRowController<S: RenderSurface> {
    api: Rc<dyn ActivityApi>,
    renderer: Rc<ActivityCardRenderer<S>>,
    banner: Rc<NotificationBanner<S>>,
}

impl<S: RenderSurface + 'static> ParticipantRowController<S> {
    pub fn new(
        api: Rc<dyn ActivityApi>,
        renderer: Rc<ActivityCardRenderer<S>>,
        banner: Rc<NotificationBanner<S>>,
    ) -> Self {
        Self {
            api,
            renderer,
            banner,
        }
    }

    /// Bind the row's removal control to [`Self::on_remove`].
    ///
    /// The handler holds the controller weakly: the surface owns its
    /// handlers, and the controller owns the surface through the renderer.
    /// Once the controller is dropped, clicks do nothing.
    pub fn wire(self: &Rc<Self>, card: &Rc<CardHandle<S::Node>>, row: RowHandle<S::Node>) {
        let control = row.control.clone();
        let controller = Rc::downgrade(self);
        let card = Rc::clone(card);

        let handler: ClickHandler = Rc::new(move || -> LocalBoxFuture<'static, ()> {
            let Some(controller) = controller.upgrade() else {
                return Box::pin(async {});
            };
            let card = Rc::clone(&card);
            let row = row.clone();
            Box::pin(async move {
                let _ = controller.on_remove(&card, &row).await;
            })
        });

        self.renderer.surface().on_click(&control, handler);
    }

    /// Unregister `row.participant` from the card's activity.
    ///
    /// On success the row is removed, the counter goes up by one and the
    /// region falls back to the empty state once no rows remain. On failure
    /// the card is left as is. Either way the banner reports the outcome.
    pub async fn on_remove(
        &self,
        card: &CardHandle<S::Node>,
        row: &RowHandle<S::Node>,
    ) -> ClientResult<()> {
        let activity = card.name();
        let participant = row.participant.as_str();

        match self.api.unregister(activity, participant).await {
            Ok(confirmation) => {
                self.renderer.remove_row(card, row);
                let spots = self.renderer.adjust_spots(card, 1);
                tracing::info!(activity, participant, ?spots, "Participant unregistered");

                self.banner.success(&confirmation.message_or(|| {
                    format!("Unregistered {} from {}", participant, activity)
                }));
                Ok(())
            }
            Err(err) => {
                tracing::error!(activity, participant, status = ?err.status(), error = %err, "Error unregistering");
                self.banner.error(&err.user_message(UNREGISTER_FAILED));
                Err(err)
            }
        }
    }
}
