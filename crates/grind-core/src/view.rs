//! Values derived from the catalog and the
//! dashboard state. Everything here is a
//! pure function; callers may memoize.

use std::collections::{
  BTreeMap,
  BTreeSet
};

use crate::catalog::{
  Catalog,
  Category,
  LinkItem
};

pub const COMPLETIONS_PER_LEVEL: usize =
  10;

/// Tags shown on a row before the rest are
/// elided.
pub const BADGE_TAG_LIMIT: usize = 2;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct Progress {
  pub completed: usize,
  pub total:     usize,
  pub percent:   u8,
  pub level:     u32
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct CardSummary {
  pub done:     usize,
  pub total:    usize,
  pub all_done: bool
}

pub fn all_tags(
  catalog: &Catalog
) -> BTreeSet<String> {
  catalog
    .links()
    .iter()
    .flat_map(|link| link.tags.iter())
    .cloned()
    .collect()
}

pub fn filtered_links<'a>(
  catalog: &'a Catalog,
  selected_tag: Option<&str>
) -> Vec<&'a LinkItem> {
  match selected_tag {
    | None => {
      catalog.links().iter().collect()
    }
    | Some(tag) => catalog
      .links()
      .iter()
      .filter(|link| link.has_tag(tag))
      .collect()
  }
}

/// Every category gets a slot, empty or
/// not, so card positions stay stable
/// while filtering.
pub fn grouped_by_category<'a>(
  links: &[&'a LinkItem]
) -> BTreeMap<Category, Vec<&'a LinkItem>>
{
  let mut groups: BTreeMap<
    Category,
    Vec<&'a LinkItem>
  > = Category::ALL
    .into_iter()
    .map(|category| (category, vec![]))
    .collect();

  for link in links {
    groups
      .entry(link.category)
      .or_default()
      .push(*link);
  }

  groups
}

/// Categories that get a card. With a tag
/// selected, empty categories are hidden.
pub fn visible_categories(
  groups: &BTreeMap<
    Category,
    Vec<&LinkItem>
  >,
  selected_tag: Option<&str>
) -> Vec<Category> {
  groups
    .iter()
    .filter(|(_, links)| {
      selected_tag.is_none()
        || !links.is_empty()
    })
    .map(|(category, _)| *category)
    .collect()
}

pub fn progress(
  completed: &BTreeSet<String>,
  catalog: &Catalog
) -> Progress {
  let total = catalog.len();
  let done = completed
    .iter()
    .filter(|id| catalog.contains(id))
    .count();

  let percent = if total == 0 {
    0
  } else {
    // round-half-up in integers; done never
    // exceeds total, so this stays <= 100
    ((200 * done + total) / (2 * total))
      as u8
  };

  Progress {
    completed: done,
    total,
    percent,
    level: (done / COMPLETIONS_PER_LEVEL)
      as u32
      + 1
  }
}

pub fn card_summary<L>(
  links: &[L],
  completed: &BTreeSet<String>
) -> CardSummary
where
  L: AsRef<LinkItem>
{
  let total = links.len();
  let done = links
    .iter()
    .map(|link| link.as_ref())
    .filter(|link: &&LinkItem| {
      completed.contains(&link.id)
    })
    .count();

  CardSummary {
    done,
    total,
    all_done: total > 0 && done == total
  }
}

/// Newline-joined URLs for the copy-all
/// action.
pub fn clipboard_payload<L>(
  links: &[L]
) -> String
where
  L: AsRef<LinkItem>
{
  links
    .iter()
    .map(|link| {
      let link: &LinkItem = link.as_ref();
      link.url.as_str()
    })
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn badge_tags(
  link: &LinkItem
) -> &[String] {
  let end =
    link.tags.len().min(BADGE_TAG_LIMIT);
  &link.tags[..end]
}
