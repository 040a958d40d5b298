//! Lookups over a decoded `/api/miners` response.
//!
//! The response is a `groupList` of groups, each with a `name` and a
//! `minerList`. Every query re-parses the entities it returns.

use serde_json::Value;

use super::fields::Fields;
use super::fleet::FleetRegistry;
use super::miner::{ClassifiedMiner, Miner};
use crate::error::Result;

/// One entry of `groupList`, with its miners still undecoded
struct Group<'a> {
    name: String,
    miners: &'a [Value],
}

/// Groups in response order, each decoded only when the iterator reaches it
fn groups(response: &Value) -> Result<impl Iterator<Item = Result<Group<'_>>> + '_> {
    let fields = Fields::of("MinersResponse", response)?;
    Ok(fields.array("groupList")?.iter().map(|group| {
        let fields = Fields::of("Group", group)?;
        Ok(Group {
            name: fields.string("name")?,
            miners: fields.array("minerList")?,
        })
    }))
}

/// Names of every group, in response order
pub fn group_names(response: &Value) -> Result<Vec<String>> {
    groups(response)?.map(|group| Ok(group?.name)).collect()
}

/// Every miner of every group, group by group, without variant dispatch
pub fn collect_all(response: &Value) -> Result<Vec<Miner>> {
    let mut miners = Vec::new();
    for group in groups(response)? {
        let group = group?;
        for miner_json in group.miners {
            miners.push(Miner::from_json(miner_json)?);
        }
    }
    Ok(miners)
}

/// Classified miners of the first group whose name is in `names`.
///
/// Quirk kept for compatibility: the search stops at the first matching
/// group, so miners of any other requested group are not returned. Use
/// [`collect_from_groups`] to get every requested group.
pub fn collect_by_groups<S: AsRef<str>>(
    response: &Value,
    names: &[S],
    registry: &FleetRegistry,
) -> Result<Vec<ClassifiedMiner>> {
    for group in groups(response)? {
        let group = group?;
        if names.iter().any(|n| n.as_ref() == group.name) {
            return classify_group(&group, registry);
        }
    }
    Ok(Vec::new())
}

/// Classified miners of every group whose name is in `names`, in response order
pub fn collect_from_groups<S: AsRef<str>>(
    response: &Value,
    names: &[S],
    registry: &FleetRegistry,
) -> Result<Vec<ClassifiedMiner>> {
    let mut miners = Vec::new();
    for group in groups(response)? {
        let group = group?;
        if names.iter().any(|n| n.as_ref() == group.name) {
            miners.extend(classify_group(&group, registry)?);
        }
    }
    Ok(miners)
}

fn classify_group(group: &Group<'_>, registry: &FleetRegistry) -> Result<Vec<ClassifiedMiner>> {
    group
        .miners
        .iter()
        .map(|miner_json| registry.classify(&group.name, miner_json))
        .collect()
}

/// First miner whose host equals `ip`
pub fn find_by_host(response: &Value, ip: &str) -> Result<Option<Miner>> {
    find_first(response, |miner| miner.host == ip)
}

/// First miner whose name equals `name`
pub fn find_by_name(response: &Value, name: &str) -> Result<Option<Miner>> {
    find_first(response, |miner| miner.name == name)
}

fn find_first<F>(response: &Value, predicate: F) -> Result<Option<Miner>>
where
    F: Fn(&Miner) -> bool,
{
    for group in groups(response)? {
        let group = group?;
        for miner_json in group.miners {
            let miner = Miner::from_json(miner_json)?;
            if predicate(&miner) {
                return Ok(Some(miner));
            }
        }
    }
    Ok(None)
}
