//! Per-version htmx vocabularies.
//!
//! Each table is built once and selected by [`HtmxVocabulary::for_version`],
//! so the grammar checks are plain set lookups.

use htmlint_core::HtmxVersion;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Attributes understood by htmx 2.
const V2_ATTRIBUTES: &[&str] = &[
    // requests
    "hx-get",
    "hx-post",
    "hx-put",
    "hx-patch",
    "hx-delete",
    // swapping and targeting
    "hx-swap",
    "hx-swap-oob",
    "hx-target",
    "hx-select",
    "hx-select-oob",
    "hx-trigger",
    "hx-sync",
    // request configuration
    "hx-boost",
    "hx-push-url",
    "hx-replace-url",
    "hx-vals",
    "hx-vars",
    "hx-headers",
    "hx-params",
    "hx-include",
    "hx-encoding",
    "hx-request",
    "hx-confirm",
    "hx-prompt",
    "hx-validate",
    "hx-disable",
    "hx-disabled-elt",
    // inheritance
    "hx-disinherit",
    "hx-inherit",
    "hx-ext",
    // history
    "hx-history",
    "hx-history-elt",
    // feedback
    "hx-indicator",
    "hx-preserve",
];

/// Attributes added in htmx 4.
const V4_ONLY_ATTRIBUTES: &[&str] = &[
    "hx-action",
    "hx-config",
    "hx-ignore",
    "hx-method",
    "hx-optimistic",
    "hx-preload",
];

/// htmx 2 attributes removed in htmx 4, with what replaces them.
const V4_REMOVED_ATTRIBUTES: &[(&str, Option<&str>)] = &[
    ("hx-disabled-elt", Some("hx-disable")),
    ("hx-disinherit", Some("the ':inherited' suffix")),
    ("hx-history-elt", None),
    ("hx-request", Some("hx-config")),
    ("hx-vars", Some("hx-vals with a 'js:' prefix")),
];

const SWAP_STYLES: &[&str] = &[
    "innerhtml",
    "outerhtml",
    "beforebegin",
    "afterbegin",
    "beforeend",
    "afterend",
    "delete",
    "none",
];

/// Swap styles and aliases added in htmx 4.
const V4_SWAP_STYLES: &[&str] = &[
    "textcontent",
    "upsert",
    "before",
    "after",
    "prepend",
    "append",
];

const TARGET_KEYWORDS: &[&str] = &["closest", "find", "next", "previous"];
const TARGET_SPECIALS: &[&str] = &["this", "next", "previous", "body"];
const V4_TARGET_KEYWORDS: &[&str] = &["findall"];
const V4_TARGET_SPECIALS: &[&str] = &[
    "document",
    "window",
    "host",
    "nextelementsibling",
    "previouselementsibling",
];

/// Standard DOM events accepted by `hx-on:*`.
pub(crate) const DOM_EVENTS: &[&str] = &[
    // mouse
    "click", "dblclick", "mousedown", "mouseup", "mousemove", "mouseenter", "mouseleave",
    "mouseover", "mouseout",
    // keyboard
    "keydown", "keyup", "keypress",
    // form
    "submit", "change", "input", "focus", "blur", "reset", "invalid", "select",
    // document and window
    "load", "unload", "resize", "scroll", "error", "beforeunload", "hashchange", "popstate",
    // drag
    "drag", "dragstart", "dragend", "dragover", "dragenter", "dragleave", "drop",
    // touch
    "touchstart", "touchend", "touchmove", "touchcancel",
    // pointer
    "pointerdown", "pointerup", "pointermove", "pointerenter", "pointerleave", "pointerover",
    "pointerout", "pointercancel",
    // animation and transition
    "animationstart", "animationend", "animationiteration", "transitionstart", "transitionend",
    "transitionrun", "transitioncancel",
    // clipboard
    "copy", "cut", "paste",
    // media
    "play", "pause", "ended", "volumechange", "seeking", "seeked", "timeupdate", "loadeddata",
    "loadedmetadata",
    // other
    "contextmenu", "wheel", "compositionstart", "compositionend",
];

/// htmx 2 events, without the `htmx:` prefix.
pub(crate) const V2_EVENTS: &[&str] = &[
    "abort",
    "afterOnLoad",
    "afterProcessNode",
    "afterRequest",
    "afterSettle",
    "afterSwap",
    "beforeCleanupElement",
    "beforeOnLoad",
    "beforeProcessNode",
    "beforeRequest",
    "beforeSend",
    "beforeSwap",
    "beforeTransition",
    "configRequest",
    "confirm",
    "historyCacheError",
    "historyCacheHit",
    "historyCacheMiss",
    "historyCacheMissLoad",
    "historyCacheMissLoadError",
    "historyRestore",
    "beforeHistorySave",
    "beforeHistoryUpdate",
    "load",
    "noSSESourceError",
    "oobAfterSwap",
    "oobBeforeSwap",
    "oobErrorNoTarget",
    "onLoadError",
    "prompt",
    "pushedIntoHistory",
    "replacedInHistory",
    "responseError",
    "sendAbort",
    "sendError",
    "sseError",
    "swapError",
    "targetError",
    "timeout",
    "trigger",
    "validateUrl",
    "validation:validate",
    "validation:failed",
    "validation:halted",
    "xhr:abort",
    "xhr:loadstart",
    "xhr:loadend",
    "xhr:progress",
];

/// htmx 4 event phases (`htmx:<phase>:<action>`).
pub(crate) const V4_EVENT_PHASES: &[&str] = &["before", "after", "error", "finally"];

/// htmx 4 events that take no phase.
pub(crate) const V4_STANDALONE_EVENTS: &[&str] = &["load", "abort", "trigger", "confirm", "prompt"];

/// htmx 4 event actions, lower-cased.
pub(crate) const V4_EVENT_ACTIONS: &[&str] = &[
    "request",
    "swap",
    "settle",
    "send",
    "process",
    "cleanup",
    "onload",
    "transition",
    "viewtransition",
    "history",
    "historyupdate",
    "historysave",
    "sse",
    "oob",
];

/// How an `hx-*` attribute name relates to the active htmx version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttributeStatus {
    /// Part of this version.
    Known,
    /// Removed in this version; carries the replacement, if any.
    Removed(Option<&'static str>),
    /// Only exists in a newer version.
    Newer,
    /// Not an htmx attribute at all.
    Unknown,
}

/// Vocabulary tables for one htmx version.
#[derive(Debug)]
pub(crate) struct HtmxVocabulary {
    pub version: HtmxVersion,
    attributes: HashSet<&'static str>,
    removed: HashMap<&'static str, Option<&'static str>>,
    newer: HashSet<&'static str>,
    swap_styles: HashSet<&'static str>,
    newer_swap_styles: HashSet<&'static str>,
    target_keywords: HashSet<&'static str>,
    target_specials: HashSet<&'static str>,
}

static V2: Lazy<HtmxVocabulary> = Lazy::new(|| HtmxVocabulary {
    version: HtmxVersion::V2,
    attributes: V2_ATTRIBUTES.iter().copied().collect(),
    removed: HashMap::new(),
    newer: V4_ONLY_ATTRIBUTES.iter().copied().collect(),
    swap_styles: SWAP_STYLES.iter().copied().collect(),
    newer_swap_styles: V4_SWAP_STYLES.iter().copied().collect(),
    target_keywords: TARGET_KEYWORDS.iter().copied().collect(),
    target_specials: TARGET_SPECIALS.iter().copied().collect(),
});

static V4: Lazy<HtmxVocabulary> = Lazy::new(|| {
    let removed: HashMap<_, _> = V4_REMOVED_ATTRIBUTES.iter().copied().collect();
    HtmxVocabulary {
        version: HtmxVersion::V4,
        attributes: V2_ATTRIBUTES
            .iter()
            .chain(V4_ONLY_ATTRIBUTES)
            .copied()
            .filter(|name| !removed.contains_key(name))
            .collect(),
        removed,
        newer: HashSet::new(),
        swap_styles: SWAP_STYLES.iter().chain(V4_SWAP_STYLES).copied().collect(),
        newer_swap_styles: HashSet::new(),
        target_keywords: TARGET_KEYWORDS
            .iter()
            .chain(V4_TARGET_KEYWORDS)
            .copied()
            .collect(),
        target_specials: TARGET_SPECIALS
            .iter()
            .chain(V4_TARGET_SPECIALS)
            .copied()
            .collect(),
    }
});

impl HtmxVocabulary {
    /// Returns the shared tables for `version`.
    pub fn for_version(version: HtmxVersion) -> &'static Self {
        match version {
            HtmxVersion::V2 => &V2,
            HtmxVersion::V4 => &V4,
        }
    }

    pub fn is_v4(&self) -> bool {
        self.version == HtmxVersion::V4
    }

    /// Classifies a lower-cased `hx-*` name with any suffix already stripped.
    pub fn attribute_status(&self, name: &str) -> AttributeStatus {
        if self.attributes.contains(name) {
            AttributeStatus::Known
        } else if let Some(replacement) = self.removed.get(name) {
            AttributeStatus::Removed(*replacement)
        } else if self.newer.contains(name) {
            AttributeStatus::Newer
        } else {
            AttributeStatus::Unknown
        }
    }

    pub fn is_swap_style(&self, style: &str) -> bool {
        self.swap_styles.contains(style)
    }

    pub fn is_newer_swap_style(&self, style: &str) -> bool {
        self.newer_swap_styles.contains(style)
    }

    pub fn is_target_keyword(&self, word: &str) -> bool {
        self.target_keywords.contains(word)
    }

    pub fn is_target_special(&self, word: &str) -> bool {
        self.target_specials.contains(word)
    }
}
