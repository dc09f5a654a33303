//! Masked avatar selection for members who have not unlocked photos.

use uuid::Uuid;

/// Asset paths for the masked avatar set, in display order.
pub const MASKED_AVATARS: &[&str] = &[
    "avatars/masked/mask-01.webp",
    "avatars/masked/mask-02.webp",
    "avatars/masked/mask-03.webp",
    "avatars/masked/mask-04.webp",
    "avatars/masked/mask-05.webp",
    "avatars/masked/mask-06.webp",
    "avatars/masked/mask-07.webp",
    "avatars/masked/mask-08.webp",
];

/// Pick the masked avatar shown for a member.
///
/// The pick is derived from the member id so the same profile keeps the
/// same mask across renders and sessions.
#[must_use]
pub fn masked_avatar_for(member_id: Uuid) -> &'static str {
    let bucket = member_id.as_u128() % MASKED_AVATARS.len() as u128;
    // bucket < MASKED_AVATARS.len(), so the narrowing conversion is exact
    let index = usize::try_from(bucket).unwrap_or(0);
    MASKED_AVATARS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_is_stable_for_a_given_member() {
        let id = Uuid::new_v4();
        assert_eq!(masked_avatar_for(id), masked_avatar_for(id));
    }

    #[test]
    fn pick_is_always_a_known_asset() {
        for _ in 0..64 {
            let avatar = masked_avatar_for(Uuid::new_v4());
            assert!(MASKED_AVATARS.contains(&avatar));
        }
    }

    #[test]
    fn distinct_members_can_get_distinct_masks() {
        let a = masked_avatar_for(Uuid::from_u128(0));
        let b = masked_avatar_for(Uuid::from_u128(1));
        assert_ne!(a, b);
    }
}
