//! Mock data generation.
//!
//! Provider roster, canned replies, vitals ranges, and the seeded message
//! thread. The value ranges match a consumer wearable at rest.

use crate::session::UserProfile;
use chrono::{DateTime, Duration, Local};
use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// The fixed provider roster.
pub const PROVIDERS: [&str; 3] = ["Dr. Smith", "Dr. Johnson", "Dr. Davis"];

/// Canned provider replies, chosen uniformly at random.
pub const CANNED_REPLIES: [&str; 5] = [
    "Thank you for your message. I'll review your information and follow up if needed.",
    "I've received your update. Your progress looks good, keep following the treatment plan.",
    "Thanks for letting me know. Let's discuss this at your next appointment.",
    "I see your concern. Have you noticed any other symptoms?",
    "Good to hear from you. Continue monitoring and let me know if anything changes.",
];

/// Who sent a message in the provider thread.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Sender {
    Patient,
    Provider,
}

/// A single entry in the provider message thread.
///
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

/// A streamed set of vitals readings.
///
#[derive(Debug, Clone, PartialEq)]
pub struct VitalsSample {
    pub heart_rate: u32,
    pub systolic: u32,
    pub diastolic: u32,
    pub temperature: f64,
    pub oxygen: u32,
}

impl VitalsSample {
    /// Resting baseline shown before any device data streams in.
    ///
    pub fn baseline() -> VitalsSample {
        VitalsSample {
            heart_rate: 68,
            systolic: 122,
            diastolic: 80,
            temperature: 98.2,
            oxygen: 97,
        }
    }

    /// Generate a fresh sample within normal resting ranges.
    ///
    pub fn random<R: Rng>(rng: &mut R) -> VitalsSample {
        VitalsSample {
            heart_rate: rng.gen_range(65..75),
            systolic: rng.gen_range(120..130),
            diastolic: rng.gen_range(78..83),
            temperature: 98.0 + rng.gen_range(0.0..0.6),
            oxygen: rng.gen_range(96..99),
        }
    }
}

/// Pick a canned provider reply.
///
pub fn random_reply<R: Rng>(rng: &mut R) -> &'static str {
    CANNED_REPLIES[rng.gen_range(0..CANNED_REPLIES.len())]
}

/// Steps gained per accrual tick.
///
pub fn random_step_gain<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(10..50)
}

/// Generate a throwaway demo profile for the registration placeholder.
///
pub fn demo_profile() -> UserProfile {
    UserProfile {
        name: Name().fake(),
        email: FreeEmail().fake(),
        role: "user".to_string(),
    }
}

/// Seed the provider thread with an opening exchange.
///
pub fn seed_thread(now: DateTime<Local>) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            sender: Sender::Provider,
            text: "Good morning! How have you been feeling since our last visit?".to_string(),
            sent_at: now - Duration::hours(2),
        },
        ChatMessage {
            sender: Sender::Patient,
            text: "Much better, thanks. Blood pressure readings have been steady.".to_string(),
            sent_at: now - Duration::hours(1),
        },
        ChatMessage {
            sender: Sender::Provider,
            text: "Great to hear. Keep logging your readings and we'll review next week."
                .to_string(),
            sent_at: now - Duration::minutes(50),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    #[test]
    fn test_vitals_sample_within_ranges() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let sample = VitalsSample::random(&mut rng);
            assert!((65..75).contains(&sample.heart_rate));
            assert!((120..130).contains(&sample.systolic));
            assert!((78..83).contains(&sample.diastolic));
            assert!(sample.temperature >= 98.0 && sample.temperature < 98.6);
            assert!((96..99).contains(&sample.oxygen));
        }
    }

    #[test]
    fn test_step_gain_within_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let gain = random_step_gain(&mut rng);
            assert!((10..50).contains(&gain));
        }
    }

    #[test]
    fn test_random_reply_comes_from_canned_set() {
        let mut rng = StepRng::new(0, 1);
        let reply = random_reply(&mut rng);
        assert!(CANNED_REPLIES.contains(&reply));
    }

    #[test]
    fn test_demo_profile_has_user_role() {
        let profile = demo_profile();
        assert_eq!(profile.role, "user");
        assert!(profile.email.contains('@'));
        assert!(!profile.name.is_empty());
    }

    #[test]
    fn test_seed_thread_is_chronological() {
        let thread = seed_thread(Local::now());
        assert_eq!(thread.len(), 3);
        for pair in thread.windows(2) {
            assert!(pair[0].sent_at <= pair[1].sent_at);
        }
        assert_eq!(thread[0].sender, Sender::Provider);
    }
}
