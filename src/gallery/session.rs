use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;
use futures_util::StreamExt;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, sleep_until};
use uuid::Uuid;

use crate::auth::admin;
use crate::catalog::ProjectCatalog;
use crate::db::blogs as blog_db;
use crate::gallery::modal::{
    ModalController, ModalKind, ModalPhase, OPEN_SETTLE_DELAY_MS, OpenEffects,
};
use crate::gallery::protocol::{
    self, ClientEvent, DOCUMENT_INITIAL_FOCUS, MODAL_INITIAL_FOCUS, ServerUpdate,
};
use crate::gallery::server::{Broadcast, GalleryServer};
use crate::gallery::state::{CategoryFilter, GalleryState};
use crate::models::project::Project;

/// Quiet period before a search keystroke triggers a recomputation.
/// Keystrokes inside the window supersede the pending one.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(180);

/// Path of the CV document shown in the preview dialog, stored as Actix
/// app data.
#[derive(Clone)]
pub struct DocumentPath(pub String);

/// GET /api/gallery/ws
///
/// Upgrades the HTTP connection to a WebSocket and spawns one session
/// task per visitor. No authentication: the gallery is public.
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    db: web::Data<DatabaseConnection>,
    catalog: web::Data<ProjectCatalog>,
    document: web::Data<DocumentPath>,
    gallery_server: web::Data<Arc<GalleryServer>>,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;
    let (session_id, rx) = gallery_server.join().await;

    actix_web::rt::spawn(run_session(
        session,
        msg_stream,
        rx,
        session_id,
        db.get_ref().clone(),
        catalog.get_ref().clone(),
        document.0.clone(),
        gallery_server.get_ref().clone(),
    ));

    Ok(response)
}

/// Drives one visitor session: reads control events from the client,
/// applies them to the per-session state machine, pushes re-render
/// updates back, and reacts to hub broadcasts and timers (search
/// debounce, modal open settling).
#[allow(clippy::too_many_arguments)]
async fn run_session(
    mut session: actix_ws::Session,
    mut msg_stream: actix_ws::MessageStream,
    mut rx: mpsc::UnboundedReceiver<Broadcast>,
    session_id: Uuid,
    db: DatabaseConnection,
    catalog: ProjectCatalog,
    document_path: String,
    server: Arc<GalleryServer>,
) {
    let projects = catalog.projects().await;
    let mut visitor = VisitorSession::new(projects, document_path);

    let initial = [visitor.gallery_view(), visitor.tag_rail()];
    if send_updates(&mut session, &initial).await.is_err() {
        server.leave(session_id).await;
        return;
    }

    loop {
        let search_at = visitor.search_deadline();
        let open_at = visitor.next_open_deadline();

        tokio::select! {
            // Incoming control event from the client.
            Some(msg) = msg_stream.next() => {
                match msg {
                    Ok(Message::Text(text)) => {
                        let updates = match serde_json::from_str::<ClientEvent>(&text) {
                            Ok(event) => visitor.handle_event(&db, event).await,
                            Err(e) => vec![ServerUpdate::Error {
                                message: format!("Invalid event format: {e}"),
                            }],
                        };
                        if send_updates(&mut session, &updates).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Ping(bytes)) => {
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(_)) => {
                        break;
                    }
                    Err(_) => {
                        break;
                    }
                    _ => {}
                }
            }
            // Blog list changed somewhere else.
            Some(broadcast) = rx.recv() => {
                let updates = visitor.handle_broadcast(&db, broadcast).await;
                if send_updates(&mut session, &updates).await.is_err() {
                    break;
                }
            }
            // Debounce window elapsed without another keystroke.
            _ = wait_until(search_at), if search_at.is_some() => {
                let updates = visitor.run_pending_search();
                if send_updates(&mut session, &updates).await.is_err() {
                    break;
                }
            }
            // A dialog's opening transition settles.
            _ = wait_until(open_at), if open_at.is_some() => {
                let updates = visitor.settle_due_opens();
                if send_updates(&mut session, &updates).await.is_err() {
                    break;
                }
            }
            else => break,
        }
    }

    server.leave(session_id).await;
    let _ = session.close(None).await;
}

async fn wait_until(at: Option<Instant>) {
    match at {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}

async fn send_updates(
    session: &mut actix_ws::Session,
    updates: &[ServerUpdate],
) -> Result<(), actix_ws::Closed> {
    for update in updates {
        let json = match serde_json::to_string(update) {
            Ok(j) => j,
            Err(_) => continue,
        };
        session.text(json).await?;
    }
    Ok(())
}

/// All per-visitor UI state: the gallery filter machine, the three dialog
/// controllers, and the pending timers that drive debounce and open
/// settling.
struct VisitorSession {
    gallery: GalleryState,
    project_modal: ModalController,
    blog_modal: ModalController,
    document_modal: ModalController,
    current_blog_id: Option<i64>,
    document_path: String,
    /// Dialogs in the order they were opened; Tab routes to the last.
    open_order: Vec<ModalKind>,
    pending_search: Option<(Instant, String)>,
    pending_opens: Vec<(Instant, ModalKind)>,
}

impl VisitorSession {
    fn new(projects: Vec<Project>, document_path: String) -> Self {
        Self {
            gallery: GalleryState::new(projects),
            project_modal: ModalController::new(ModalKind::Project),
            blog_modal: ModalController::new(ModalKind::Blog),
            document_modal: ModalController::new(ModalKind::Document),
            current_blog_id: None,
            document_path,
            open_order: Vec::new(),
            pending_search: None,
            pending_opens: Vec::new(),
        }
    }

    fn controller_mut(&mut self, kind: ModalKind) -> &mut ModalController {
        match kind {
            ModalKind::Project => &mut self.project_modal,
            ModalKind::Blog => &mut self.blog_modal,
            ModalKind::Document => &mut self.document_modal,
        }
    }

    fn gallery_view(&self) -> ServerUpdate {
        ServerUpdate::Gallery {
            projects: self.gallery.filtered.clone(),
            category: self.gallery.category.as_str().to_string(),
            tag: self.gallery.tag.clone(),
            query: self.gallery.query.clone(),
        }
    }

    fn tag_rail(&self) -> ServerUpdate {
        ServerUpdate::TagRail {
            tags: self.gallery.available_tags(),
        }
    }

    async fn handle_event(
        &mut self,
        db: &DatabaseConnection,
        event: ClientEvent,
    ) -> Vec<ServerUpdate> {
        match event {
            ClientEvent::SelectCategory { category } => match CategoryFilter::parse(&category) {
                Some(filter) => {
                    self.gallery.select_category(filter);
                    self.pending_search = None;
                    vec![self.gallery_view(), self.tag_rail()]
                }
                None => vec![ServerUpdate::Error {
                    message: format!("Unknown category: {category}"),
                }],
            },
            ClientEvent::ToggleTag { tag } => {
                self.gallery.toggle_tag(&tag);
                vec![self.gallery_view()]
            }
            ClientEvent::Search { query } => {
                self.pending_search = Some((Instant::now() + SEARCH_DEBOUNCE, query));
                Vec::new()
            }
            ClientEvent::OpenProject { id, focus } => self.open_project(id, focus),
            ClientEvent::OpenBlog { id, focus } => self.open_blog(db, id, focus).await,
            ClientEvent::PreviewDocument { focus } => self.preview_document(focus),
            ClientEvent::CloseModal { modal } | ClientEvent::BackdropClick { modal } => {
                self.close_modal(modal)
            }
            ClientEvent::Escape => self.escape(),
            ClientEvent::TabKey { shift } => self.tab(shift),
        }
    }

    fn open_project(&mut self, id: f64, origin: Option<String>) -> Vec<ServerUpdate> {
        let Some(project) = self.gallery.project(id) else {
            return vec![ServerUpdate::Error {
                message: format!("Project {id} not found"),
            }];
        };
        let detail = ServerUpdate::project_detail(project);
        let focusables = protocol::project_focusables(project);

        let effects = self
            .project_modal
            .open(focusables, MODAL_INITIAL_FOCUS, origin);
        self.begin_open(ModalKind::Project, detail, effects)
    }

    async fn open_blog(
        &mut self,
        db: &DatabaseConnection,
        id: i64,
        origin: Option<String>,
    ) -> Vec<ServerUpdate> {
        let blogs = match blog_db::load(db).await {
            Ok(blogs) => blogs,
            Err(e) => {
                return vec![ServerUpdate::Error {
                    message: format!("Database error: {e}"),
                }];
            }
        };
        let Some(post) = blogs.get(id) else {
            return vec![ServerUpdate::Error {
                message: format!("Blog post {id} not found"),
            }];
        };
        let is_admin = match admin::is_admin(db).await {
            Ok(flag) => flag,
            Err(e) => {
                return vec![ServerUpdate::Error {
                    message: format!("Database error: {e}"),
                }];
            }
        };

        self.current_blog_id = Some(id);
        let detail = ServerUpdate::blog_detail(post, is_admin);
        let focusables = protocol::blog_focusables(is_admin);

        let effects = self.blog_modal.open(focusables, MODAL_INITIAL_FOCUS, origin);
        self.begin_open(ModalKind::Blog, detail, effects)
    }

    fn preview_document(&mut self, origin: Option<String>) -> Vec<ServerUpdate> {
        let detail = ServerUpdate::DocumentPreview {
            path: self.document_path.clone(),
        };
        let effects = self.document_modal.open(
            protocol::document_focusables(),
            DOCUMENT_INITIAL_FOCUS,
            origin,
        );
        self.begin_open(ModalKind::Document, detail, effects)
    }

    fn begin_open(
        &mut self,
        kind: ModalKind,
        content: ServerUpdate,
        effects: OpenEffects,
    ) -> Vec<ServerUpdate> {
        self.open_order.retain(|k| *k != kind);
        self.open_order.push(kind);
        self.pending_opens.retain(|(_, k)| *k != kind);
        self.pending_opens.push((
            Instant::now() + Duration::from_millis(OPEN_SETTLE_DELAY_MS),
            kind,
        ));

        let mut updates = vec![
            content,
            ServerUpdate::Modal {
                modal: kind,
                phase: ModalPhase::Opening,
            },
            ServerUpdate::ScrollLock { locked: true },
        ];
        if let Some(target) = effects.focus {
            updates.push(ServerUpdate::FocusMoved { target });
        }
        updates
    }

    /// Close one dialog. A dialog that is not visible stays untouched and
    /// produces no updates.
    fn close_modal(&mut self, kind: ModalKind) -> Vec<ServerUpdate> {
        let controller = self.controller_mut(kind);
        let Some(effects) = controller.close() else {
            return Vec::new();
        };
        controller.settle_close();

        let mut updates = vec![ServerUpdate::Modal {
            modal: kind,
            phase: ModalPhase::Closing,
        }];
        if let Some(target) = effects.restore_focus {
            updates.push(ServerUpdate::FocusMoved { target });
        }
        updates.push(ServerUpdate::ScrollLock { locked: false });
        updates.push(ServerUpdate::Modal {
            modal: kind,
            phase: ModalPhase::Closed,
        });

        if kind == ModalKind::Blog {
            self.current_blog_id = None;
        }
        self.open_order.retain(|k| *k != kind);
        self.pending_opens.retain(|(_, k)| *k != kind);
        updates
    }

    /// Escape checks every dialog independently and closes each one that
    /// reports itself visible. If more than one is somehow visible, all
    /// of them close (preserved edge case).
    fn escape(&mut self) -> Vec<ServerUpdate> {
        let mut updates = self.close_modal(ModalKind::Project);
        updates.extend(self.close_modal(ModalKind::Blog));
        updates.extend(self.close_modal(ModalKind::Document));
        updates
    }

    fn tab(&mut self, shift: bool) -> Vec<ServerUpdate> {
        let Some(kind) = self.open_order.last().copied() else {
            return Vec::new();
        };
        match self.controller_mut(kind).tab(shift) {
            Some(target) => vec![ServerUpdate::FocusMoved { target }],
            None => Vec::new(),
        }
    }

    async fn handle_broadcast(
        &mut self,
        db: &DatabaseConnection,
        broadcast: Broadcast,
    ) -> Vec<ServerUpdate> {
        match broadcast {
            Broadcast::BlogsChanged => {
                let mut updates = vec![ServerUpdate::BlogsInvalidated];
                if self.blog_modal.is_visible() {
                    if let Some(id) = self.current_blog_id {
                        updates.extend(self.refresh_blog_detail(db, id).await);
                    }
                }
                updates
            }
            Broadcast::BlogDeleted { id } => {
                let mut updates = vec![ServerUpdate::BlogsInvalidated];
                if self.current_blog_id == Some(id) {
                    updates.extend(self.close_modal(ModalKind::Blog));
                }
                updates
            }
        }
    }

    /// Re-render the open blog dialog after its post changed elsewhere;
    /// if the post no longer exists, close the dialog.
    async fn refresh_blog_detail(&mut self, db: &DatabaseConnection, id: i64) -> Vec<ServerUpdate> {
        let blogs = match blog_db::load(db).await {
            Ok(blogs) => blogs,
            Err(e) => {
                return vec![ServerUpdate::Error {
                    message: format!("Database error: {e}"),
                }];
            }
        };
        match blogs.get(id) {
            Some(post) => {
                let is_admin = admin::is_admin(db).await.unwrap_or(false);
                vec![ServerUpdate::blog_detail(post, is_admin)]
            }
            None => self.close_modal(ModalKind::Blog),
        }
    }

    fn search_deadline(&self) -> Option<Instant> {
        self.pending_search.as_ref().map(|(at, _)| *at)
    }

    fn next_open_deadline(&self) -> Option<Instant> {
        self.pending_opens.iter().map(|(at, _)| *at).min()
    }

    /// Run the most recent pending search; earlier superseded keystrokes
    /// were already discarded when their window was replaced.
    fn run_pending_search(&mut self) -> Vec<ServerUpdate> {
        let Some((_, query)) = self.pending_search.take() else {
            return Vec::new();
        };
        self.gallery.search(&query);
        vec![self.gallery_view()]
    }

    fn settle_due_opens(&mut self) -> Vec<ServerUpdate> {
        let now = Instant::now();
        let (due, pending): (Vec<_>, Vec<_>) = self
            .pending_opens
            .drain(..)
            .partition(|(at, _)| *at <= now);
        self.pending_opens = pending;

        let mut updates = Vec::new();
        for (_, kind) in due {
            let controller = self.controller_mut(kind);
            controller.settle_open();
            if controller.phase() == ModalPhase::Open {
                updates.push(ServerUpdate::Modal {
                    modal: kind,
                    phase: ModalPhase::Open,
                });
            }
        }
        updates
    }
}
