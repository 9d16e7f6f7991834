//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Flatten core records into plain envelopes the UI can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Chat and partner state live for the process; they reset on restart.
//! - Timers stay on the Dart side; delays are only reported, never slept.

use community_drop_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    submit_registration, Conversation, CoreConfig, Hub, HubFilter, HubKind, HubKindFilter,
    HubRegistration, HubService, InMemoryHubRepository, InMemoryPartnerRepository,
    InMemoryTrackingRepository, Message, PartnerPackage, PartnerService, TrackingLookup,
    TrackingService,
};
use log::warn;
use std::sync::{Mutex, OnceLock, RwLock};

static CORE_CONFIG: OnceLock<RwLock<CoreConfig>> = OnceLock::new();
static CHAT_SESSION: OnceLock<Mutex<Conversation>> = OnceLock::new();
static PARTNER_SESSION: OnceLock<Mutex<PartnerService<InMemoryPartnerRepository>>> =
    OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Timing and routing values the UI uses for its own timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfigView {
    pub reply_delay_ms: u64,
    pub scan_redirect_delay_ms: u64,
    pub track_lookup_delay_ms: u64,
    pub tracking_path: String,
    pub log_level: String,
}

/// Returns the active presentation configuration.
#[flutter_rust_bridge::frb(sync)]
pub fn core_config() -> CoreConfigView {
    let config = active_config();
    CoreConfigView {
        reply_delay_ms: config.reply_delay_ms,
        scan_redirect_delay_ms: config.scan_redirect_delay_ms,
        track_lookup_delay_ms: config.track_lookup_delay_ms,
        tracking_path: config.tracking_path.clone(),
        log_level: config.log_level.as_str().to_string(),
    }
}

/// Replaces the active configuration with a JSON document.
///
/// Input semantics:
/// - `config_json`: object with any of `reply_delay_ms`, `scan_redirect_delay_ms`,
///   `track_lookup_delay_ms`, `tracking_path`, `log_level`; missing keys use defaults.
///
/// # FFI contract
/// - Invalid documents leave the active configuration unchanged.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure(config_json: String) -> String {
    let config = match CoreConfig::from_json_str(&config_json) {
        Ok(config) => config,
        Err(err) => return format!("configure failed: {err}"),
    };
    match config_slot().write() {
        Ok(mut active) => {
            *active = config;
            String::new()
        }
        Err(_) => "configure failed: config lock poisoned".to_string(),
    }
}

/// One rendered chat bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessageItem {
    pub id: String,
    /// `user|assistant`.
    pub sender: String,
    pub content: String,
    pub timestamp_ms: i64,
    /// Suggestion chips; empty for user messages.
    pub suggestions: Vec<String>,
}

/// Chat state snapshot returned by every chat call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub ok: bool,
    pub message: String,
    /// Whether a reply is pending; the UI shows the typing indicator.
    pub is_typing: bool,
    pub history: Vec<ChatMessageItem>,
}

/// Starts a fresh conversation with the greeting message.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_reset() -> ChatResponse {
    with_chat(|conversation| {
        *conversation = Conversation::default();
        Ok("Conversation started.".to_string())
    })
}

/// Appends user text (or a clicked suggestion chip) and schedules a reply.
///
/// # FFI contract
/// - Blank text returns `ok=false` and leaves history untouched.
/// - The UI calls `chat_resolve_pending` after `reply_delay_ms`.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_submit(text: String) -> ChatResponse {
    with_chat(|conversation| {
        conversation
            .submit(&text)
            .map(|_| "Message sent.".to_string())
            .map_err(|err| format!("chat_submit failed: {err}"))
    })
}

/// Appends the pending assistant reply, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_resolve_pending() -> ChatResponse {
    with_chat(|conversation| {
        Ok(match conversation.resolve_pending() {
            Some(_) => "Reply added.".to_string(),
            None => "No pending reply.".to_string(),
        })
    })
}

/// Discards any pending reply when the chat view closes.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_close() -> ChatResponse {
    with_chat(|conversation| {
        conversation.close();
        Ok("Conversation closed.".to_string())
    })
}

/// Current chat history.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_history() -> ChatResponse {
    with_chat(|_| Ok(String::new()))
}

/// Scan classification envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResponse {
    pub ok: bool,
    pub display: String,
    pub should_navigate: bool,
    /// `path?code=...` when auto-navigation applies.
    pub navigation_uri: Option<String>,
    /// URI for the explicit "track anyway" action.
    pub manual_track_uri: String,
    pub redirect_delay_ms: u64,
    pub message: String,
}

/// Classifies decoded or manually entered scan text.
///
/// # FFI contract
/// - Blank text returns `ok=false` with no navigation.
#[flutter_rust_bridge::frb(sync)]
pub fn scan_interpret(raw_text: String) -> ScanResponse {
    let config = active_config();
    if raw_text.trim().is_empty() {
        return ScanResponse {
            ok: false,
            display: String::new(),
            should_navigate: false,
            navigation_uri: None,
            manual_track_uri: String::new(),
            redirect_delay_ms: 0,
            message: "Scan text is empty.".to_string(),
        };
    }

    let interpreter = config.scan_interpreter();
    let outcome = interpreter.interpret(&raw_text);
    ScanResponse {
        ok: true,
        message: format!("Scanned: {}", outcome.display),
        should_navigate: outcome.should_navigate,
        navigation_uri: outcome.navigation_target.map(|target| target.to_uri()),
        manual_track_uri: interpreter.track_anyway(&raw_text).to_uri(),
        redirect_delay_ms: config.scan_redirect_delay_ms,
        display: outcome.display,
    }
}

/// One row in the tracking timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEventItem {
    pub status: String,
    pub badge: String,
    pub location: String,
    pub timestamp: String,
    pub description: String,
}

/// Tracking view envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackResponse {
    pub found: bool,
    pub tracking_number: String,
    pub recipient: Option<String>,
    pub hub_name: Option<String>,
    pub hub_address: Option<String>,
    pub estimated_pickup: Option<String>,
    pub events: Vec<TrackEventItem>,
    pub message: String,
}

/// Looks up one tracking number against the mock table.
#[flutter_rust_bridge::frb(sync)]
pub fn track_lookup(tracking_number: String) -> TrackResponse {
    let service = TrackingService::new(InMemoryTrackingRepository::seeded());
    let mut response = TrackResponse {
        found: false,
        tracking_number: tracking_number.clone(),
        recipient: None,
        hub_name: None,
        hub_address: None,
        estimated_pickup: None,
        events: Vec::new(),
        message: String::new(),
    };

    match service.lookup(&tracking_number) {
        Ok(TrackingLookup::Found { record }) => {
            response.found = true;
            response.message = format!("Package {} found.", record.tracking_number);
            response.events = record
                .status_history
                .iter()
                .map(|event| TrackEventItem {
                    status: event.status.as_str().to_string(),
                    badge: event.status.badge(),
                    location: event.location.clone(),
                    timestamp: event.timestamp.clone(),
                    description: event.description.clone(),
                })
                .collect();
            response.recipient = Some(record.recipient);
            response.hub_name = Some(record.hub_name);
            response.hub_address = Some(record.hub_address);
            response.estimated_pickup = Some(record.estimated_pickup);
        }
        Ok(TrackingLookup::NotFound { echoed }) => {
            response.message = format!("No package found with tracking number: {echoed}");
        }
        Err(err) => {
            response.message = format!("track_lookup failed: {err}");
        }
    }
    response
}

/// Hub list row.
#[derive(Debug, Clone, PartialEq)]
pub struct HubItem {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub kind_label: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub rating: f32,
    pub operating_hours: String,
    pub capacity: u32,
    pub amenities: Vec<String>,
    pub distance_miles: Option<f32>,
}

/// Lists hubs matching `search` and `kind` (`all|warehouse|shop|home`).
///
/// Unknown `kind` values fall back to `all`.
#[flutter_rust_bridge::frb(sync)]
pub fn hubs_list(search: Option<String>, kind: String) -> Vec<HubItem> {
    let kind_filter = HubKindFilter::parse(kind.trim()).unwrap_or_else(|| {
        warn!("event=hubs_list module=ffi status=fallback reason=unknown_kind");
        HubKindFilter::All
    });
    let service = HubService::new(InMemoryHubRepository::seeded());
    service
        .list_hubs(&HubFilter::new(search, kind_filter))
        .into_iter()
        .map(to_hub_item)
        .collect()
}

/// Partner dashboard package row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerPackageItem {
    pub id: String,
    pub tracking_number: String,
    pub recipient: String,
    pub arrival_time: String,
    pub pickup_code: String,
    pub status: String,
}

/// Packages held by the demo partner hub.
#[flutter_rust_bridge::frb(sync)]
pub fn partner_packages() -> Vec<PartnerPackageItem> {
    match partner_session().lock() {
        Ok(service) => service
            .list_packages()
            .into_iter()
            .map(to_partner_item)
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: String) -> Self {
        Self {
            ok: true,
            id: Some(id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Confirms pickup of a `ready` package.
#[flutter_rust_bridge::frb(sync)]
pub fn partner_confirm_pickup(package_id: String) -> ActionResponse {
    let Ok(mut service) = partner_session().lock() else {
        return ActionResponse::failure("partner session unavailable");
    };
    match service.confirm_pickup(package_id.trim()) {
        Ok(package) => ActionResponse::success("Pickup confirmed.", package.id),
        Err(err) => ActionResponse::failure(format!("partner_confirm_pickup failed: {err}")),
    }
}

/// Toggles whether the partner hub accepts new packages.
#[flutter_rust_bridge::frb(sync)]
pub fn partner_set_hub_active(active: bool) -> ActionResponse {
    let Ok(mut service) = partner_session().lock() else {
        return ActionResponse::failure("partner session unavailable");
    };
    service.set_hub_active(active);
    ActionResponse {
        ok: true,
        id: None,
        message: if service.is_hub_active() {
            "Hub is active.".to_string()
        } else {
            "Hub is inactive.".to_string()
        },
    }
}

/// Hub registration form as sent by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterHubRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hub_name: String,
    /// `warehouse|shop|home`.
    pub hub_type: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub capacity: String,
    pub operating_hours: String,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub agreed_to_terms: bool,
}

/// Validates and submits a hub registration.
#[flutter_rust_bridge::frb(sync)]
pub fn register_hub(request: RegisterHubRequest) -> ActionResponse {
    let Some(hub_type) = HubKind::parse(request.hub_type.trim()) else {
        return ActionResponse::failure(format!(
            "register_hub failed: unsupported hub type `{}`",
            request.hub_type
        ));
    };
    let form = HubRegistration {
        name: request.name,
        email: request.email,
        phone: request.phone,
        hub_name: request.hub_name,
        hub_type,
        address: request.address,
        city: request.city,
        zip_code: request.zip_code,
        capacity: request.capacity,
        operating_hours: request.operating_hours,
        description: request.description,
        amenities: request.amenities,
        agreed_to_terms: request.agreed_to_terms,
    };
    match submit_registration(&form) {
        Ok(receipt) => ActionResponse::success(receipt.message, receipt.application_id.to_string()),
        Err(err) => ActionResponse::failure(format!("register_hub failed: {err}")),
    }
}

fn config_slot() -> &'static RwLock<CoreConfig> {
    CORE_CONFIG.get_or_init(|| RwLock::new(CoreConfig::default()))
}

fn active_config() -> CoreConfig {
    match config_slot().read() {
        Ok(config) => config.clone(),
        Err(_) => CoreConfig::default(),
    }
}

fn partner_session() -> &'static Mutex<PartnerService<InMemoryPartnerRepository>> {
    PARTNER_SESSION
        .get_or_init(|| Mutex::new(PartnerService::new(InMemoryPartnerRepository::seeded())))
}

fn with_chat(f: impl FnOnce(&mut Conversation) -> Result<String, String>) -> ChatResponse {
    let session = CHAT_SESSION.get_or_init(|| Mutex::new(Conversation::default()));
    let Ok(mut conversation) = session.lock() else {
        return ChatResponse {
            ok: false,
            message: "chat session unavailable".to_string(),
            is_typing: false,
            history: Vec::new(),
        };
    };

    let (ok, message) = match f(&mut conversation) {
        Ok(message) => (true, message),
        Err(message) => (false, message),
    };
    ChatResponse {
        ok,
        message,
        is_typing: conversation.is_typing(),
        history: conversation.history().iter().map(to_chat_item).collect(),
    }
}

fn to_chat_item(message: &Message) -> ChatMessageItem {
    ChatMessageItem {
        id: message.id.to_string(),
        sender: message.sender.as_str().to_string(),
        content: message.content.clone(),
        timestamp_ms: message.timestamp_ms,
        suggestions: message.suggestions.clone().unwrap_or_default(),
    }
}

fn to_hub_item(hub: Hub) -> HubItem {
    HubItem {
        kind: hub.kind.as_str().to_string(),
        kind_label: hub.kind.label().to_string(),
        lat: hub.position.lat,
        lng: hub.position.lng,
        id: hub.id,
        name: hub.name,
        address: hub.address,
        rating: hub.rating,
        operating_hours: hub.operating_hours,
        capacity: hub.capacity,
        amenities: hub.amenities,
        distance_miles: hub.distance_miles,
    }
}

fn to_partner_item(package: PartnerPackage) -> PartnerPackageItem {
    PartnerPackageItem {
        status: package.status.as_str().to_string(),
        id: package.id,
        tracking_number: package.tracking_number,
        recipient: package.recipient,
        arrival_time: package.arrival_time,
        pickup_code: package.pickup_code,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        chat_history, chat_reset, chat_resolve_pending, chat_submit, configure, core_config,
        core_version, hubs_list, init_logging, partner_confirm_pickup, partner_packages,
        partner_set_hub_active, ping, register_hub, scan_interpret, track_lookup,
        RegisterHubRequest,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn core_config_reports_default_timers() {
        let config = core_config();
        assert_eq!(config.reply_delay_ms, 1_000);
        assert_eq!(config.tracking_path, "/track");
    }

    #[test]
    fn configure_rejects_invalid_documents_and_keeps_active_config() {
        let bad_path = configure(r#"{"tracking_path": "track"}"#.to_string());
        assert!(bad_path.contains("tracking path"));
        let malformed = configure("{".to_string());
        assert!(malformed.contains("invalid config document"));
        assert_eq!(core_config().tracking_path, "/track");

        assert!(configure("{}".to_string()).is_empty());
        assert_eq!(core_config().scan_redirect_delay_ms, 1_500);
    }

    #[test]
    fn partner_hub_active_toggle_round_trips() {
        let inactive = partner_set_hub_active(false);
        assert!(inactive.ok);
        assert_eq!(inactive.message, "Hub is inactive.");
        let active = partner_set_hub_active(true);
        assert_eq!(active.message, "Hub is active.");
    }

    // Chat state is process-wide, so the whole flow lives in one test.
    #[test]
    fn chat_flow_submits_and_resolves_in_order() {
        let reset = chat_reset();
        assert!(reset.ok);
        assert_eq!(reset.history.len(), 1);
        assert_eq!(reset.history[0].sender, "assistant");

        let blank = chat_submit("   ".to_string());
        assert!(!blank.ok);
        assert_eq!(blank.history.len(), 1);

        let submitted = chat_submit("Track my package".to_string());
        assert!(submitted.ok, "{}", submitted.message);
        assert!(submitted.is_typing);
        assert_eq!(submitted.history.len(), 2);

        let resolved = chat_resolve_pending();
        assert!(!resolved.is_typing);
        assert_eq!(resolved.history.len(), 3);
        assert_eq!(resolved.history[2].sender, "assistant");
        assert!(resolved.history[2]
            .suggestions
            .contains(&"Scan QR code".to_string()));

        assert_eq!(chat_history().history, resolved.history);
    }

    #[test]
    fn scan_interpret_builds_navigation_uri() {
        let response = scan_interpret("CD123456789".to_string());
        assert!(response.ok);
        assert!(response.should_navigate);
        assert_eq!(
            response.navigation_uri.as_deref(),
            Some("/track?code=CD123456789")
        );
        assert_eq!(response.redirect_delay_ms, 1_500);

        let other = scan_interpret("XYZ999".to_string());
        assert!(!other.should_navigate);
        assert_eq!(other.display, "XYZ999");
        assert_eq!(other.manual_track_uri, "/track?code=XYZ999");

        assert!(!scan_interpret(" ".to_string()).ok);
    }

    #[test]
    fn track_lookup_flattens_record_and_echoes_misses() {
        let found = track_lookup("CD123456789".to_string());
        assert!(found.found);
        assert_eq!(found.events[0].status, "ready-pickup");
        assert_eq!(found.recipient.as_deref(), Some("John Doe"));

        let missing = track_lookup("CD000000000".to_string());
        assert!(!missing.found);
        assert!(missing.message.contains("CD000000000"));
    }

    #[test]
    fn hubs_list_filters_and_falls_back_on_unknown_kind() {
        let main = hubs_list(Some("main".to_string()), "all".to_string());
        assert_eq!(main.len(), 1);
        assert_eq!(main[0].kind_label, "Local Shop");

        assert_eq!(hubs_list(None, "castle".to_string()).len(), 3);
        assert_eq!(hubs_list(None, "home".to_string()).len(), 1);
    }

    #[test]
    fn partner_pickup_only_accepts_pending_transition_once() {
        assert_eq!(partner_packages().len(), 3);
        let pending = partner_confirm_pickup("2".to_string());
        assert!(!pending.ok);
        assert!(pending.message.contains("pending"));
        assert!(!partner_confirm_pickup("404".to_string()).ok);
    }

    #[test]
    fn register_hub_validates_type_and_fields() {
        let request = RegisterHubRequest {
            name: "Ana Perez".to_string(),
            email: "ana@example.com".to_string(),
            phone: "5551234567".to_string(),
            hub_name: "Corner Books".to_string(),
            hub_type: "shop".to_string(),
            address: "12 Elm Street".to_string(),
            city: "New York".to_string(),
            zip_code: "10001".to_string(),
            capacity: "40".to_string(),
            operating_hours: "9:00 AM - 6:00 PM".to_string(),
            description: None,
            amenities: Vec::new(),
            agreed_to_terms: true,
        };
        let accepted = register_hub(request.clone());
        assert!(accepted.ok, "{}", accepted.message);
        assert!(accepted.id.is_some());

        let mut bad_type = request.clone();
        bad_type.hub_type = "castle".to_string();
        assert!(!register_hub(bad_type).ok);

        let mut no_terms = request;
        no_terms.agreed_to_terms = false;
        let rejected = register_hub(no_terms);
        assert!(rejected.message.contains("terms"));
    }
}
