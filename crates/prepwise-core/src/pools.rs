//! Static question pools, one per practice surface.
//!
//! Pools are authored in code, deduplicated by question text at construction,
//! and only ever read. Every practice screen (topic quiz, case study, exam
//! simulation, psychometric practice) samples from these through
//! [`crate::sampler::sample`].

use crate::error::CoreError;
use crate::model::{Question, Quiz};
use crate::sampler::sample;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Number of questions drawn for a full exam simulation.
pub const EXAM_SIMULATION_SIZE: usize = 30;
/// Time limit attached to the exam-simulation quiz, in minutes.
pub const EXAM_TIME_LIMIT_MINUTES: u32 = 45;

/// Default draw size when a caller does not pass `count`.
pub const DEFAULT_QUIZ_SIZE: usize = 5;

/// Slug + size row for the topic listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TopicSummary {
    pub slug: String,
    pub title: String,
    pub question_count: usize,
}

/// All static pools, keyed by topic slug plus the two special pools.
pub struct PoolCatalog {
    topics: BTreeMap<&'static str, (&'static str, Vec<Question>)>,
    case_study: Vec<Question>,
    psychometric: Vec<Question>,
}

fn q(
    topic: &str,
    text: &str,
    options: [&str; 4],
    correct_answer: usize,
    explanation: &str,
) -> Question {
    Question {
        text: text.to_string(),
        options: options.map(|o| o.to_string()),
        correct_answer,
        explanation: explanation.to_string(),
        topic: topic.to_string(),
    }
}

/// Drops later questions whose text already appeared. Sampling without
/// replacement only guarantees a duplicate-free quiz over a deduplicated pool.
fn dedup_by_text(pool: Vec<Question>) -> Vec<Question> {
    let mut seen: HashSet<String> = HashSet::new();
    pool.into_iter()
        .filter(|question| seen.insert(question.text.clone()))
        .collect()
}

impl PoolCatalog {
    pub fn new() -> Self {
        let mut topics = BTreeMap::new();
        topics.insert(
            "quantitative-reasoning",
            ("Quantitative Reasoning", dedup_by_text(quantitative_pool())),
        );
        topics.insert(
            "verbal-reasoning",
            ("Verbal Reasoning", dedup_by_text(verbal_pool())),
        );
        topics.insert("english", ("English", dedup_by_text(english_pool())));
        topics.insert("logic", ("Logic", dedup_by_text(logic_pool())));
        Self {
            topics,
            case_study: dedup_by_text(case_study_pool()),
            psychometric: dedup_by_text(psychometric_pool()),
        }
    }

    /// Topic slugs with display titles and pool sizes, in slug order.
    pub fn topics(&self) -> Vec<TopicSummary> {
        self.topics
            .iter()
            .map(|(slug, (title, pool))| TopicSummary {
                slug: slug.to_string(),
                title: title.to_string(),
                question_count: pool.len(),
            })
            .collect()
    }

    /// The raw pool for a topic slug.
    pub fn topic_pool(&self, slug: &str) -> Result<&[Question], CoreError> {
        self.topics
            .get(slug)
            .map(|(_, pool)| pool.as_slice())
            .ok_or_else(|| CoreError::UnknownTopic(slug.to_string()))
    }

    /// A sampled quiz for one topic.
    pub fn topic_quiz(&self, slug: &str, count: usize) -> Result<Quiz, CoreError> {
        let (title, pool) = self
            .topics
            .get(slug)
            .ok_or_else(|| CoreError::UnknownTopic(slug.to_string()))?;
        let questions = sample(pool, count);
        Ok(Quiz::new(&format!("{} Practice", title), slug, questions))
    }

    /// A sampled case-study quiz (scenario questions, mixed topics).
    pub fn case_study_quiz(&self, count: usize) -> Quiz {
        let questions = sample(&self.case_study, count);
        Quiz::new("Case Study Practice", "case-study", questions)
    }

    /// A sampled psychometric practice quiz.
    pub fn psychometric_quiz(&self, count: usize) -> Quiz {
        let questions = sample(&self.psychometric, count);
        Quiz::new("Psychometric Practice", "psychometric", questions).psychometric()
    }

    /// Full timed exam simulation: [`EXAM_SIMULATION_SIZE`] questions drawn
    /// across every topic pool.
    pub fn exam_simulation(&self) -> Quiz {
        let combined: Vec<Question> = self
            .topics
            .values()
            .flat_map(|(_, pool)| pool.iter().cloned())
            .collect();
        let questions = sample(&combined, EXAM_SIMULATION_SIZE);
        Quiz::new("Exam Simulation", "exam-simulation", questions)
            .with_time_limit(EXAM_TIME_LIMIT_MINUTES)
    }

    /// Total questions across the topic pools (exam-simulation source size).
    pub fn combined_pool_size(&self) -> usize {
        self.topics.values().map(|(_, pool)| pool.len()).sum()
    }
}

impl Default for PoolCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn quantitative_pool() -> Vec<Question> {
    let t = "quantitative-reasoning";
    vec![
        q(t, "If 3x + 7 = 22, what is x?", ["3", "5", "7", "15"], 1,
          "Subtract 7 from both sides (3x = 15) and divide by 3."),
        q(t, "What is 15% of 240?", ["24", "30", "36", "48"], 2,
          "10% of 240 is 24; 5% is 12; together 36."),
        q(t, "A train covers 180 km in 2.5 hours. What is its average speed?",
          ["60 km/h", "72 km/h", "80 km/h", "90 km/h"], 1,
          "180 divided by 2.5 equals 72."),
        q(t, "The average of 4, 8, and x is 10. What is x?", ["8", "12", "18", "30"], 2,
          "The three numbers must sum to 30, so x = 30 - 12 = 18."),
        q(t, "What is the area of a circle with radius 3? (use pi)",
          ["3pi", "6pi", "9pi", "12pi"], 2,
          "Area is pi times radius squared: pi * 9."),
        q(t, "If a shirt priced at 80 is discounted by 25%, what is the new price?",
          ["55", "60", "65", "75"], 1,
          "25% of 80 is 20, leaving 60."),
        q(t, "What is the next number in the sequence 2, 6, 18, 54, ...?",
          ["108", "120", "162", "216"], 2,
          "Each term is multiplied by 3; 54 * 3 = 162."),
        q(t, "Two dice are rolled. What is the probability both show 6?",
          ["1/6", "1/12", "1/18", "1/36"], 3,
          "Independent events: 1/6 * 1/6 = 1/36."),
    ]
}

fn verbal_pool() -> Vec<Question> {
    let t = "verbal-reasoning";
    vec![
        q(t, "Choose the pair with the same relation as GLOVE : HAND.",
          ["sock : foot", "tie : collar", "ring : jewel", "belt : buckle"], 0,
          "A glove is worn on a hand as a sock is worn on a foot."),
        q(t, "Which word is closest in meaning to 'candid'?",
          ["guarded", "frank", "clever", "hesitant"], 1,
          "Candid means open and honest — frank."),
        q(t, "Which word is the opposite of 'scarce'?",
          ["rare", "abundant", "distant", "fragile"], 1,
          "Scarce means in short supply; abundant is its antonym."),
        q(t, "Complete: 'The verdict was ___ by new evidence that surfaced after the trial.'",
          ["confirmed", "overturned", "predicted", "celebrated"], 1,
          "Evidence surfacing after a trial typically overturns a verdict."),
        q(t, "BOOK : CHAPTER is most like which pair?",
          ["play : act", "page : margin", "pen : ink", "shelf : library"], 0,
          "A chapter is a structural division of a book, as an act is of a play."),
        q(t, "Which word is closest in meaning to 'meticulous'?",
          ["careless", "rapid", "thorough", "reluctant"], 2,
          "Meticulous means showing great attention to detail."),
        q(t, "Choose the sentence with correct agreement.",
          ["The data was lost.", "The committee argue daily.",
           "Each of the players has a locker.", "Neither of them were ready."], 2,
          "'Each' takes a singular verb: 'has'."),
        q(t, "Which word does not belong: apple, banana, carrot, mango?",
          ["apple", "banana", "carrot", "mango"], 2,
          "Carrot is a vegetable; the others are fruits."),
    ]
}

fn english_pool() -> Vec<Question> {
    let t = "english";
    vec![
        q(t, "Choose the correct form: 'She ___ to the library every Tuesday.'",
          ["go", "goes", "going", "gone"], 1,
          "Third-person singular present takes 'goes'."),
        q(t, "Which sentence is in the passive voice?",
          ["The chef cooked the meal.", "The meal was cooked by the chef.",
           "The chef is cooking.", "Cook the meal now."], 1,
          "The subject receives the action: 'was cooked by'."),
        q(t, "Pick the correctly spelled word.",
          ["recieve", "receive", "receeve", "receve"], 1,
          "I before E except after C: receive."),
        q(t, "'By next June, they ___ the bridge.' Choose the best completion.",
          ["will finish", "will have finished", "finished", "have finished"], 1,
          "A deadline in the future takes the future perfect."),
        q(t, "Which is the best synonym for 'reluctant'?",
          ["eager", "unwilling", "tired", "uncertain"], 1,
          "Reluctant means unwilling or hesitant."),
        q(t, "Identify the adverb: 'She answered the question quickly.'",
          ["answered", "question", "quickly", "she"], 2,
          "'Quickly' modifies the verb 'answered'."),
        q(t, "Choose the correct preposition: 'He is responsible ___ the budget.'",
          ["of", "for", "at", "to"], 1,
          "'Responsible for' is the standard collocation."),
        q(t, "Which sentence uses an apostrophe correctly?",
          ["Its raining outside.", "The dog wagged it's tail.",
           "The students' essays were graded.", "Shes already left."], 2,
          "Plural possessive: the essays of the students."),
    ]
}

fn logic_pool() -> Vec<Question> {
    let t = "logic";
    vec![
        q(t, "All roses are flowers. Some flowers fade quickly. Which must be true?",
          ["All roses fade quickly.", "Some roses fade quickly.",
           "Some flowers are roses.", "No roses fade quickly."], 2,
          "Only the converse of the first premise is guaranteed."),
        q(t, "If it rains, the match is cancelled. The match was not cancelled. What follows?",
          ["It rained.", "It did not rain.", "The match was moved.", "Nothing follows."], 1,
          "Modus tollens: denying the consequent denies the antecedent."),
        q(t, "Which number continues the series 1, 1, 2, 3, 5, 8, ...?",
          ["11", "12", "13", "15"], 2,
          "Fibonacci: each term is the sum of the previous two."),
        q(t, "Ann is taller than Ben. Ben is taller than Carl. Who is shortest?",
          ["Ann", "Ben", "Carl", "Cannot be determined"], 2,
          "Transitivity of the ordering puts Carl last."),
        q(t, "Some doctors are surgeons. All surgeons are skilled. Which must be true?",
          ["All doctors are skilled.", "Some doctors are skilled.",
           "No doctors are skilled.", "All skilled people are surgeons."], 1,
          "The doctors who are surgeons must be skilled."),
        q(t, "A clock shows 3:15. What is the angle between the hands?",
          ["0 degrees", "7.5 degrees", "15 degrees", "30 degrees"], 1,
          "The hour hand has moved a quarter past 3: 7.5 degrees past the minute hand."),
        q(t, "Which conclusion is valid? 'No cats are dogs. Rex is a dog.'",
          ["Rex is a cat.", "Rex is not a cat.", "Some cats are Rex.", "None of these."], 1,
          "Rex belongs to a class disjoint from cats."),
        q(t, "If every X is Y and no Y is Z, then:",
          ["Some X are Z.", "No X is Z.", "All Z are X.", "Some Z are Y."], 1,
          "X sits inside Y, and Y is disjoint from Z."),
    ]
}

fn case_study_pool() -> Vec<Question> {
    let t = "case-study";
    vec![
        q(t, "A store's revenue rose 20% while units sold fell 10%. What best explains this?",
          ["Prices were cut.", "Average price per unit rose.",
           "Costs decreased.", "Inventory grew."], 1,
          "Revenue up on fewer units means each unit sold for more."),
        q(t, "A study finds students who eat breakfast score higher. What is the main flaw in concluding breakfast causes higher scores?",
          ["Sample too large.", "Correlation is not causation.",
           "Scores were self-reported.", "Breakfast is unhealthy."], 1,
          "A confounder (e.g. household routine) could drive both."),
        q(t, "A factory doubles staff but output rises only 50%. Which concept applies?",
          ["Economies of scale", "Diminishing returns",
           "Opportunity cost", "Comparative advantage"], 1,
          "Additional inputs yield progressively smaller output gains."),
        q(t, "A survey of gym members finds most people exercise daily. Why can't this generalize to the whole city?",
          ["The sample is biased.", "The sample is too small.",
           "Daily exercise is rare.", "Surveys are unreliable."], 0,
          "Gym members are not representative of the general population."),
        q(t, "A firm's profit fell despite record revenue. Which figure must have risen?",
          ["Market share", "Costs", "Sales volume", "Headcount"], 1,
          "Profit is revenue minus costs; with revenue up, costs rose faster."),
        q(t, "Two treatments are compared without random assignment. The headline claims one 'works better'. What is missing?",
          ["A larger budget", "A control for selection effects",
           "More treatments", "A longer headline"], 1,
          "Without randomization, group differences may pre-date treatment."),
    ]
}

fn psychometric_pool() -> Vec<Question> {
    let t = "psychometric";
    vec![
        q(t, "Which shape completes the pattern: circle, square, circle, square, ...?",
          ["circle", "square", "triangle", "hexagon"], 0,
          "The pattern alternates; after square comes circle."),
        q(t, "Continue the series: 3, 6, 12, 24, ...",
          ["30", "36", "48", "60"], 2,
          "Each term doubles."),
        q(t, "If CODE is written as DPEF, how is GATE written?",
          ["HBUF", "FZSD", "HAUE", "GBTF"], 0,
          "Each letter shifts forward by one."),
        q(t, "Which is the odd one out: 121, 144, 169, 180?",
          ["121", "144", "169", "180"], 3,
          "The others are perfect squares."),
        q(t, "A cube has how many edges?",
          ["8", "10", "12", "16"], 2,
          "A cube has 12 edges, 8 vertices, 6 faces."),
        q(t, "Continue: Z, X, V, T, ...",
          ["S", "R", "Q", "P"], 1,
          "Every second letter backwards: R follows T."),
        q(t, "If all Blips are Blobs and this is not a Blob, is it a Blip?",
          ["Yes", "No", "Only sometimes", "Cannot say"], 1,
          "Not being a Blob rules out being a Blip."),
        q(t, "Which number is missing: 5, 10, ?, 20, 25?",
          ["12", "14", "15", "16"], 2,
          "The series climbs by 5."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_has_a_valid_answer_index() {
        let catalog = PoolCatalog::new();
        let mut all: Vec<Question> = catalog
            .topics()
            .iter()
            .flat_map(|t| catalog.topic_pool(&t.slug).unwrap().to_vec())
            .collect();
        all.extend(catalog.case_study_quiz(usize::MAX).questions);
        all.extend(catalog.psychometric_quiz(usize::MAX).questions);
        assert!(!all.is_empty());
        for question in &all {
            assert!(question.correct_answer < 4, "bad index in: {}", question.text);
        }
    }

    #[test]
    fn pools_are_deduplicated() {
        let catalog = PoolCatalog::new();
        for topic in catalog.topics() {
            let pool = catalog.topic_pool(&topic.slug).unwrap();
            let mut texts: Vec<&str> = pool.iter().map(|q| q.text.as_str()).collect();
            texts.sort_unstable();
            let before = texts.len();
            texts.dedup();
            assert_eq!(before, texts.len(), "duplicates in {}", topic.slug);
        }
    }

    #[test]
    fn exam_simulation_draws_thirty_timed_questions() {
        let catalog = PoolCatalog::new();
        assert!(catalog.combined_pool_size() >= EXAM_SIMULATION_SIZE);
        let quiz = catalog.exam_simulation();
        assert_eq!(quiz.questions.len(), EXAM_SIMULATION_SIZE);
        assert_eq!(quiz.time_limit_minutes, Some(EXAM_TIME_LIMIT_MINUTES));
    }

    #[test]
    fn psychometric_quiz_is_flagged() {
        let catalog = PoolCatalog::new();
        let quiz = catalog.psychometric_quiz(4);
        assert!(quiz.is_psychometric);
        assert_eq!(quiz.questions.len(), 4);
    }

    #[test]
    fn unknown_topic_is_an_error() {
        let catalog = PoolCatalog::new();
        assert!(catalog.topic_quiz("underwater-basket-weaving", 3).is_err());
    }
}
