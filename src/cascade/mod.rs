use crate::{Error, Label};
use alloc::collections::BTreeMap;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::iter::FromIterator;
use log::warn;

/// Master to slaves links between physically coupled nodes.
///
/// A fault forced onto a master also forces every slave, through any chain of
/// masters, to the same value. Entries keep the order in which their master
/// was first added; that order decides which entry wins when a label is the
/// slave of several masters.
///
/// Deserialized lists go through [`add_cascade_fault`](Self::add_cascade_fault),
/// so a master listed twice is merged into its first entry.
#[derive(PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<(L, Vec<L>)>",
        into = "Vec<(L, Vec<L>)>",
        bound(
            serialize = "L: Clone + serde::Serialize",
            deserialize = "L: crate::Label + serde::Deserialize<'de>"
        )
    )
)]
pub struct CascadeFaultsConfiguration<L> {
    links: Vec<(L, Vec<L>)>,
}

impl<L> CascadeFaultsConfiguration<L>
where
    L: Label,
{
    pub fn new() -> Self {
        CascadeFaultsConfiguration { links: Vec::new() }
    }

    /// Appends `slaves` to the slave list of `master`.
    pub fn add_cascade_fault<I>(&mut self, master: L, slaves: I)
    where
        I: IntoIterator<Item = L>,
    {
        match self.links.iter_mut().find(|(m, _)| *m == master) {
            Some((_, existing)) => existing.extend(slaves),
            None => self.links.push((master, slaves.into_iter().collect())),
        }
    }

    /// Returns the root master `label` is a slave of, directly or through a
    /// chain of masters, or `None` when `label` is nobody's slave.
    ///
    /// Every entry listing `label` is visited and the last one wins.
    pub fn master_element(&self, label: &L) -> Result<Option<L>, Error> {
        self.climb(label, &mut Vec::new(), &mut BTreeMap::new())
    }

    /// `roots` caches labels whose climb already finished. A finished climb
    /// met no cycle, so its root does not depend on the path that reached it.
    fn climb<'a>(
        &'a self,
        label: &'a L,
        path: &mut Vec<&'a L>,
        roots: &mut BTreeMap<&'a L, Option<L>>,
    ) -> Result<Option<L>, Error> {
        if let Some(root) = roots.get(label) {
            return Ok(root.clone());
        }
        if path.contains(&label) {
            warn!("cascade fault cycle through `{}`", label);
            return Err(Error::CascadeCycle(label.to_string()));
        }
        path.push(label);
        let mut master: Option<L> = None;
        for (current, slaves) in self.links.iter() {
            if slaves.contains(label) {
                master = Some(match self.climb(current, path, roots)? {
                    Some(root) => root,
                    None => current.clone(),
                });
            }
        }
        path.pop();
        roots.insert(label, master.clone());
        Ok(master)
    }

    /// Checks every declared slave for a cyclic master chain.
    pub fn validate(&self) -> Result<(), Error> {
        let mut roots: BTreeMap<&L, Option<L>> = BTreeMap::new();
        for (_, slaves) in self.links.iter() {
            for slave in slaves {
                self.climb(slave, &mut Vec::new(), &mut roots)?;
            }
        }
        Ok(())
    }

    pub fn slaves(&self, master: &L) -> Option<&[L]> {
        self.links
            .iter()
            .find(|(m, _)| m == master)
            .map(|(_, slaves)| slaves.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&L, &[L])> {
        self.links
            .iter()
            .map(|(master, slaves)| (master, slaves.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<L> Default for CascadeFaultsConfiguration<L> {
    fn default() -> Self {
        CascadeFaultsConfiguration { links: Vec::new() }
    }
}

impl<L> FromIterator<(L, Vec<L>)> for CascadeFaultsConfiguration<L>
where
    L: Label,
{
    fn from_iter<I: IntoIterator<Item = (L, Vec<L>)>>(iter: I) -> Self {
        let mut configuration: CascadeFaultsConfiguration<L> = CascadeFaultsConfiguration::new();
        for (master, slaves) in iter {
            configuration.add_cascade_fault(master, slaves);
        }
        configuration
    }
}

impl<L> From<Vec<(L, Vec<L>)>> for CascadeFaultsConfiguration<L>
where
    L: Label,
{
    fn from(links: Vec<(L, Vec<L>)>) -> Self {
        links.into_iter().collect()
    }
}

impl<L> From<CascadeFaultsConfiguration<L>> for Vec<(L, Vec<L>)> {
    fn from(configuration: CascadeFaultsConfiguration<L>) -> Self {
        configuration.links
    }
}
