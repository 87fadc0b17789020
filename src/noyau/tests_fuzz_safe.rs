//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - invariants : aucun panic, tout Ok est fini, normalisation idempotente
//!   sur forme canonique, diviseurs nuls => DivisionByZero,
//!   accord avec un évaluateur de référence (deux niveaux, gauche à droite)

use std::time::{Duration, Instant};

use super::erreur::EvaluationFailure;
use super::evaluate_expression;
use super::normalise::normalize;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence ------------------------ */

const OPS: [char; 5] = ['+', '-', '*', '/', '%'];

fn applique_ref(op: char, a: f64, b: f64) -> Result<f64, EvaluationFailure> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' if b == 0.0 => Err(EvaluationFailure::DivisionByZero),
        '/' => Ok(a / b),
        _ => Ok(a / 100.0 * b),
    }
}

/// Évaluation de référence d’une chaîne plate `v0 op1 v1 op2 v2 ...` :
/// somme signée de termes, chaque terme replié à gauche sur * / %.
fn reference(
    negatif: bool,
    vals: &[f64],
    ops: &[char],
) -> Result<f64, EvaluationFailure> {
    let mut somme = 0.0;
    let mut signe = if negatif { -1.0 } else { 1.0 };
    let mut terme = vals[0];

    for (&op, &v) in ops.iter().zip(&vals[1..]) {
        match op {
            '+' | '-' => {
                somme += signe * terme;
                signe = if op == '+' { 1.0 } else { -1.0 };
                terme = v;
            }
            _ => terme = applique_ref(op, terme, v)?,
        }
    }
    Ok(somme + signe * terme)
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    // 0 inclus : les diviseurs nuls doivent apparaître
    let n = rng.pick(10);
    if rng.coin() {
        (format!("{n}.5"), n as f64 + 0.5)
    } else {
        (format!("{n}"), n as f64)
    }
}

/// Opérande : nombre, ou groupe "(a op b)" (jamais imbriqué : "((" serait fusionné).
/// Le bool indique un groupe ; la valeur d’un groupe peut déjà être une erreur ("(3/0)").
fn gen_operande(rng: &mut Rng) -> (String, Result<f64, EvaluationFailure>, bool) {
    if rng.pick(4) == 0 {
        let (ta, a) = gen_nombre(rng);
        let (tb, b) = gen_nombre(rng);
        let op = OPS[rng.pick(OPS.len() as u32) as usize];
        (format!("({ta}{op}{tb})"), applique_ref(op, a, b), true)
    } else {
        let (t, v) = gen_nombre(rng);
        (t, Ok(v), false)
    }
}

struct Cas {
    texte: String,
    attendu: Result<f64, EvaluationFailure>,
}

fn gen_cas(rng: &mut Rng, longueur: usize) -> Cas {
    let negatif = rng.pick(5) == 0;
    let mut texte = String::new();
    if negatif {
        texte.push('-');
    }

    let mut vals = Vec::with_capacity(longueur);
    let mut ops = Vec::with_capacity(longueur);
    let mut echec: Option<EvaluationFailure> = None;

    for i in 0..longueur {
        let (t, v, groupe) = gen_operande(rng);

        if i > 0 {
            let op = OPS[rng.pick(OPS.len() as u32) as usize];
            // juxtaposition "3(1+2)" ou "(1+2)(3+4)" pour '*' : multiplication implicite
            let implicite = op == '*' && groupe && rng.coin();
            if !implicite {
                texte.push(op);
            }
            if rng.pick(6) == 0 {
                texte.push(' ');
            }
            ops.push(op);
        }
        texte.push_str(&t);

        match v {
            Ok(v) => vals.push(v),
            Err(e) => {
                echec.get_or_insert(e);
                vals.push(0.0);
            }
        }
    }

    let attendu = match echec {
        Some(e) => Err(e),
        None => reference(negatif, &vals, &ops),
    };
    Cas { texte, attendu }
}

fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789..+-*/%^()( )x";
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_accord_avec_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + rng.pick(8) as usize;
        let cas = gen_cas(&mut rng, longueur);
        let obtenu = evaluate_expression(&cas.texte);

        match (&obtenu, &cas.attendu) {
            (Ok(a), Ok(b)) => {
                assert!(proche(*a, *b), "expr={:?} obtenu={a} attendu={b}", cas.texte);
                seen_ok += 1;
            }
            (Err(a), Err(b)) => {
                assert_eq!(a, b, "expr={:?}", cas.texte);
                if *a == EvaluationFailure::DivisionByZero {
                    seen_div0 += 1;
                }
            }
            _ => panic!(
                "désaccord: expr={:?} obtenu={obtenu:?} attendu={:?}",
                cas.texte, cas.attendu
            ),
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro générée");
}

#[test]
fn fuzz_safe_bruit_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;
    let mut seen_canon = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let longueur = rng.pick(24) as usize;
        let s = gen_bruit(&mut rng, longueur);

        // idempotence de la normalisation, sur une sortie canonique (sans "((" ni "))")
        let une = normalize(&s);
        if !une.contains("((") && !une.contains("))") {
            assert_eq!(normalize(&une), une, "entrée={s:?}");
            seen_canon += 1;
        }

        // déterminisme + aucun résultat non fini
        let r1 = evaluate_expression(&s);
        let r2 = evaluate_expression(&s);
        assert_eq!(r1, r2, "entrée={s:?}");

        match r1 {
            Ok(v) => {
                assert!(v.is_finite(), "entrée={s:?} v={v}");
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
    }

    assert!(seen_ok > 0, "aucun succès: bruit trop “sale”");
    assert!(seen_err > 0, "aucune erreur vue: bruit trop “sage”");
    assert!(seen_canon > 0, "aucune sortie canonique");
}

#[test]
fn fuzz_safe_longue_somme_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // pile et RPN itératives : pas de récursion, longueur sans risque
    let expr = vec!["1"; 20_000].join("+");
    budget(t0, max);

    assert_eq!(evaluate_expression(&expr), Ok(20_000.0));
}
