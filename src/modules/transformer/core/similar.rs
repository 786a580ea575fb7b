use crate::modules::transformer::core::lexicon::SynonymLexicon;
use crate::modules::transformer::core::tokenize::affixes;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Synonym-substituted rewrites of `message`.
///
/// Candidate `i` swaps every word that has synonyms for its `i`-th synonym,
/// clamped to the last one available. All occurrences of a repeated word get
/// the same replacement. Without `max_synonyms`, as many candidates are built
/// as the richest word has synonyms.
pub fn similar_messages(
    message: &str,
    lexicon: &dyn SynonymLexicon,
    max_synonyms: Option<usize>,
) -> Vec<String> {
    let original: Vec<&str> = message.split_whitespace().collect();

    // distinct words in order of first appearance, with every position they occupy
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
    let mut group_of: HashMap<&str, usize> = HashMap::new();
    for (index, &word) in original.iter().enumerate() {
        match group_of.entry(word) {
            Entry::Occupied(group) => groups[*group.get()].1.push(index),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push((word, vec![index]));
            }
        }
    }

    // only words with synonyms take part; surrounding punctuation is kept
    let substitutions: Vec<(Vec<String>, Vec<usize>)> = groups
        .into_iter()
        .filter_map(|(word, positions)| {
            let synonyms = lexicon.synonyms(word);
            if synonyms.is_empty() {
                return None;
            }
            let (prefix, suffix) = affixes(word);
            let wrapped = synonyms
                .iter()
                .map(|lemma| format!("{prefix}{lemma}{suffix}"))
                .collect();
            Some((wrapped, positions))
        })
        .collect();

    let candidates = max_synonyms.unwrap_or_else(|| {
        substitutions
            .iter()
            .map(|(synonyms, _)| synonyms.len())
            .max()
            .unwrap_or(0)
    });

    (0..candidates)
        .map(|synonym_index| {
            let mut rewritten: Vec<&str> = original.clone();
            for (synonyms, positions) in &substitutions {
                let Some(last) = synonyms.last() else {
                    continue;
                };
                let replacement = synonyms.get(synonym_index).unwrap_or(last);
                for &position in positions {
                    rewritten[position] = replacement.as_str();
                }
            }
            rewritten.join(" ")
        })
        .collect()
}
