//! Navigation-related state types.
//!
//! This module contains the section enum, the router that tracks which
//! single section is visible, and the modal overlay enum.

use crate::session::Session;
use log::*;

/// Specifying the top-level sections of the dashboard.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Section {
    Overview,
    Health,
    Goals,
    Communication,
    Settings,
}

impl Section {
    /// Return every section in navigation order.
    ///
    pub fn all() -> [Section; 5] {
        [
            Section::Overview,
            Section::Health,
            Section::Goals,
            Section::Communication,
            Section::Settings,
        ]
    }

    /// Return the display title for the navigation bar.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Health => "Health Data",
            Section::Goals => "Goals",
            Section::Communication => "Communication",
            Section::Settings => "Settings",
        }
    }
}

/// Specifying the modal overlays that can sit on top of a section.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Modal {
    Goal,
    Medication,
    Appointment,
    DataSharing,
}

/// Predicate deciding whether a section may be activated for the given
/// session.
pub type SectionValidator = Box<dyn Fn(&Session) -> bool + Send>;

struct Registration {
    section: Section,
    validator: Option<SectionValidator>,
}

/// Tracks which single section is visible.
///
/// The set of registered sections is fixed at setup time. Exactly one
/// section is active after any successful `activate`; before the first
/// activation the router reports `None`. The highlighted navigation entry
/// is derived from `current()` rather than stored separately.
pub struct SectionRouter {
    registered: Vec<Registration>,
    active: Option<Section>,
}

impl SectionRouter {
    /// Return a new router with an empty registry and no active section.
    ///
    pub fn new() -> SectionRouter {
        SectionRouter {
            registered: vec![],
            active: None,
        }
    }

    /// Declare a navigable section. Re-registering an already-registered
    /// section is a no-op; the first registration wins.
    ///
    pub fn register(&mut self, section: Section) {
        self.register_entry(section, None);
    }

    /// Declare a navigable section gated by a validator predicate.
    ///
    pub fn register_with_validator(&mut self, section: Section, validator: SectionValidator) {
        self.register_entry(section, Some(validator));
    }

    fn register_entry(&mut self, section: Section, validator: Option<SectionValidator>) {
        if self.registered.iter().any(|r| r.section == section) {
            debug!("Section {:?} already registered, ignoring", section);
            return;
        }
        self.registered.push(Registration { section, validator });
    }

    /// Deactivate the current section and activate the requested one.
    /// Unregistered sections and rejected validators leave the router
    /// unchanged.
    ///
    pub fn activate(&mut self, section: Section, session: &Session) {
        let registration = match self.registered.iter().find(|r| r.section == section) {
            Some(registration) => registration,
            None => {
                debug!("Ignoring activation of unregistered section {:?}", section);
                return;
            }
        };
        if let Some(validator) = &registration.validator {
            if !validator(session) {
                debug!("Validator rejected activation of section {:?}", section);
                return;
            }
        }
        self.active = Some(section);
    }

    /// Return the active section, or None before the first activation.
    ///
    pub fn current(&self) -> Option<Section> {
        self.active
    }

    /// Return the registered sections in registration order, for rendering
    /// the navigation bar.
    ///
    pub fn sections(&self) -> Vec<Section> {
        self.registered.iter().map(|r| r.section).collect()
    }

    /// Return the position of the active section within the registry. This
    /// is a projection of `current()` used for tab highlighting.
    ///
    pub fn nav_index(&self) -> Option<usize> {
        let active = self.active?;
        self.registered.iter().position(|r| r.section == active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> Session {
        Session {
            signed_in: true,
            display_name: "A".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    fn full_router() -> SectionRouter {
        let mut router = SectionRouter::new();
        for section in Section::all() {
            router.register(section);
        }
        router
    }

    #[test]
    fn test_no_active_section_before_first_activation() {
        let router = full_router();
        assert_eq!(router.current(), None);
        assert_eq!(router.nav_index(), None);
    }

    #[test]
    fn test_activate_tracks_last_valid_section() {
        let mut router = full_router();
        let session = signed_in();

        for section in [Section::Goals, Section::Overview, Section::Settings] {
            router.activate(section, &session);
            assert_eq!(router.current(), Some(section));
        }
    }

    #[test]
    fn test_activate_unregistered_is_noop() {
        let mut router = SectionRouter::new();
        router.register(Section::Overview);
        let session = signed_in();

        router.activate(Section::Overview, &session);
        router.activate(Section::Goals, &session);
        assert_eq!(router.current(), Some(Section::Overview));
    }

    #[test]
    fn test_activate_on_empty_registry_is_noop() {
        let mut router = SectionRouter::new();
        router.activate(Section::Overview, &signed_in());
        assert_eq!(router.current(), None);
    }

    #[test]
    fn test_validator_gates_activation() {
        let mut router = SectionRouter::new();
        router.register(Section::Overview);
        router.register_with_validator(
            Section::Communication,
            Box::new(|session: &Session| session.signed_in),
        );

        let signed_out = Session::signed_out();
        router.activate(Section::Communication, &signed_out);
        assert_eq!(router.current(), None);

        router.activate(Section::Communication, &signed_in());
        assert_eq!(router.current(), Some(Section::Communication));
    }

    #[test]
    fn test_duplicate_register_is_noop() {
        let mut router = SectionRouter::new();
        router.register(Section::Overview);
        router.register(Section::Overview);
        assert_eq!(router.sections(), vec![Section::Overview]);
    }

    #[test]
    fn test_nav_index_follows_active_section() {
        let mut router = full_router();
        router.activate(Section::Goals, &signed_in());
        assert_eq!(router.nav_index(), Some(2));
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(Section::Overview.title(), "Overview");
        assert_eq!(Section::Health.title(), "Health Data");
        assert_eq!(Section::Communication.title(), "Communication");
    }
}
