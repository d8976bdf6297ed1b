use std::collections::BTreeSet;

use derive_more::Deref;
use getset::{CopyGetters, Getters};
use tracing::debug;

use crate::{Error, Result, id::LinkId};

/// A social media account shown in the contacts section of the card.
///
/// Both fields may be empty while the user is still typing.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct SocialLink {
    #[getset(get_copy = "pub")]
    id: LinkId,
    #[getset(get = "pub")]
    pub(crate) platform: String,
    #[getset(get = "pub")]
    pub(crate) username: String,
}

impl SocialLink {
    fn new() -> Self {
        Self {
            id: LinkId::new(),
            platform: String::new(),
            username: String::new(),
        }
    }
}

/// The ordered social links of a profile. Insertion order is display order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deref)]
pub struct SocialLinks {
    #[deref(forward)]
    links: Vec<SocialLink>,
}

impl SocialLinks {
    /// Append an empty [`SocialLink`] with a fresh id to the end of the list.
    pub fn append(&mut self) -> LinkId {
        let link = SocialLink::new();
        let id = link.id;
        self.links.push(link);

        debug!("Appended social link {id}");

        id
    }

    /// Remove the links at the given positions.
    ///
    /// Positions refer to the list as it was before the call, so `{0, 2}` on `[A, B, C]`
    /// leaves `[B]`. Duplicates are ignored. If any position is out of bounds nothing is
    /// removed. The removed links are returned in their original order.
    pub fn remove_at<I>(&mut self, positions: I) -> Result<Vec<SocialLink>>
    where
        I: IntoIterator<Item = usize>,
    {
        let len = self.links.len();
        let positions: BTreeSet<usize> = positions.into_iter().collect();

        if let Some(&position) = positions.iter().find(|&&p| p >= len) {
            return Err(Error::PositionOutOfBounds { position, len });
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.links)
            .into_iter()
            .enumerate()
            .partition(|(position, _)| positions.contains(position));

        self.links = kept.into_iter().map(|(_, link)| link).collect();

        debug!("Removed {} social link(s) at {positions:?}", removed.len());

        Ok(removed.into_iter().map(|(_, link)| link).collect())
    }

    pub fn get_mut(&mut self, id: LinkId) -> Result<&mut SocialLink> {
        self.links
            .iter_mut()
            .find(|link| link.id == id)
            .ok_or(Error::UnknownLink(id))
    }

    /// The current position of the link with the given id.
    pub fn position(&self, id: LinkId) -> Option<usize> {
        self.links.iter().position(|link| link.id == id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn links_with(platforms: &[&str]) -> SocialLinks {
        let mut links = SocialLinks::default();
        for platform in platforms {
            let id = links.append();
            links.get_mut(id).unwrap().platform = platform.to_string();
        }
        links
    }

    fn platforms(links: &SocialLinks) -> Vec<&str> {
        links.iter().map(|link| link.platform().as_str()).collect()
    }

    #[test]
    fn test_append() {
        let mut links = SocialLinks::default();

        let first = links.append();
        let second = links.append();

        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.platform().is_empty() && l.username().is_empty()));
        assert_ne!(first, second);
        assert_eq!(links.position(first), Some(0));
        assert_eq!(links.position(second), Some(1));
    }

    #[test]
    fn test_append_then_remove_last_round_trips() {
        let mut links = links_with(&["github", "twitter"]);
        let before = links.clone();

        let appended = links.append();
        let last = links.len() - 1;
        let removed = links.remove_at([last]).unwrap();

        assert_eq!(links, before);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed.first().map(SocialLink::id), Some(appended));
        assert!(links.position(appended).is_none());
    }

    #[test]
    fn test_remove_uses_original_positions() {
        let mut links = links_with(&["a", "b", "c"]);

        let removed = links.remove_at([0, 2]).unwrap();

        assert_eq!(platforms(&links), ["b"]);
        assert_eq!(
            removed.iter().map(|l| l.platform().as_str()).collect::<Vec<_>>(),
            ["a", "c"]
        );
    }

    #[test]
    fn test_remove_ignores_duplicates_and_order() {
        let mut links = links_with(&["a", "b", "c", "d"]);

        links.remove_at([3, 1, 3]).unwrap();

        assert_eq!(platforms(&links), ["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_bounds_is_rejected() {
        let mut links = links_with(&["a", "b"]);
        let before = links.clone();

        assert!(matches!(
            links.remove_at([0, 2]),
            Err(Error::PositionOutOfBounds {
                position: 2,
                len: 2
            })
        ));
        assert_eq!(links, before);

        let mut empty = SocialLinks::default();
        assert!(empty.remove_at([0]).is_err());
    }

    #[test]
    fn test_remove_nothing() {
        let mut links = links_with(&["a"]);

        assert!(links.remove_at(std::iter::empty()).unwrap().is_empty());
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_get_mut_unknown_id() {
        let mut links = links_with(&["a"]);
        let mut other = SocialLinks::default();
        let foreign = other.append();

        assert!(matches!(links.get_mut(foreign), Err(Error::UnknownLink(id)) if id == foreign));
    }
}
