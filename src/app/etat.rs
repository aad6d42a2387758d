//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (opérandes, opération, résultats,
//! erreur, digits, démarche) et offrir des actions simples (CLR/AC/échange)
//! sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas d’arithmétique).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur ΣLocal (digits).

use calculatrice_fraction::noyau::{Operation, Proprietes};

/// Précision ΣLocal par défaut (lecture décimale tronquée).
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Étiquette de l’opérande B : seule une fraction est acceptée par le noyau,
/// les autres natures servent à montrer le refus de type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NatureB {
    Fraction,
    Entier,
    Flottant,
}

impl NatureB {
    pub fn libelle(self) -> &'static str {
        match self {
            NatureB::Fraction => "fraction",
            NatureB::Entier => "entier",
            NatureB::Flottant => "flottant",
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub operandes: String,
    pub formule: String,
    pub reduction: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrées utilisateur ---
    pub a_num: i64,
    pub a_den: i64,
    pub op: Operation,
    pub nature_b: NatureB,
    pub b_num: i64,
    pub b_den: i64,
    pub b_flottant: f64,

    // --- sorties ---
    pub exact: String,       // forme réduite (ou vrai/faux)
    pub mixte: String,       // nombre mixte
    pub lecture: String,     // ΣLocal (décimal tronqué)
    pub flottant: String,    // f64 (approché)
    pub erreur: String,      // message d’erreur (si l’opération échoue)
    pub lecture_dispo: bool, // false si booléen / erreur / vide
    pub proprietes: Option<Proprietes>,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize, // précision ΣLocal
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            a_num: 1,
            a_den: 2,
            op: Operation::Addition,
            nature_b: NatureB::Fraction,
            b_num: 1,
            b_den: 3,
            b_flottant: 0.5,
            exact: String::new(),
            mixte: String::new(),
            lecture: String::new(),
            flottant: String::new(),
            erreur: String::new(),
            lecture_dispo: false, // au démarrage : rien à lire
            proprietes: None,
            demarche: Demarche::default(),
            digits: DIGITS_DEFAUT,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (opérandes + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher aux opérandes).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.mixte.clear();
        self.lecture.clear();
        self.flottant.clear();
        self.erreur.clear();
        self.lecture_dispo = false; // clair : il n’y a rien à lire
        self.proprietes = None;
        self.clear_demarche();
    }

    /// A↔B : échange A et B (seulement si B est une fraction).
    pub fn echanger(&mut self) {
        if self.nature_b != NatureB::Fraction {
            return;
        }
        std::mem::swap(&mut self.a_num, &mut self.b_num);
        std::mem::swap(&mut self.a_den, &mut self.b_den);
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `exact` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe tout le reste : mixte, ΣLocal, flottant, propriétés, démarche.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();

        self.mixte.clear();
        self.flottant.clear();
        self.proprietes = None;

        // ΣLocal indisponible en cas d’erreur
        self.lecture.clear();
        self.lecture_dispo = false;

        self.clear_demarche();
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(
        &mut self,
        exact: impl Into<String>,
        mixte: Option<String>,
        lecture: Option<String>,
        flottant: Option<f64>,
        proprietes: Option<Proprietes>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.exact = exact.into();
        self.mixte = mixte.unwrap_or_default();
        self.flottant = flottant.map(|v| v.to_string()).unwrap_or_default();
        self.proprietes = proprietes;
        self.demarche = demarche;

        if let Some(v) = lecture {
            self.lecture_dispo = true;
            self.lecture = v;
        } else {
            self.lecture_dispo = false;
            self.lecture.clear();
        }
    }

    /// Garde-fou : limite digits (évite abus / gel plus tard).
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }
}
