//! Classification prompt sent with every validation request.
//!
//! The prompt is the de-facto protocol between this crate and the remote
//! model: it pins the three-line reply format that `mriguard-core` parses.
//! Changing the marker lines here requires touching the parser too.

/// Instruction prompt for brain MRI classification.
pub const VALIDATION_PROMPT: &str = "Analyze this image carefully and determine if it is a brain MRI (Magnetic Resonance Imaging) scan.

You must respond in this EXACT format:
VALID: [YES/NO]
CONFIDENCE: [HIGH/MEDIUM/LOW]
REASON: [Brief explanation]

Criteria for a valid brain MRI:
1. Must be a medical imaging scan (grayscale or colored medical imaging)
2. Must show brain structures (cerebral cortex, ventricles, white/gray matter)
3. Must be an MRI scan (not CT, X-ray, ultrasound, or other imaging types)
4. Should be a proper axial, sagittal, or coronal brain view
5. Not a photograph, drawing, or non-medical image

Examples of INVALID images:
- Photos of people, animals, objects, landscapes
- Other body part scans (knee, chest, abdomen MRI)
- CT scans, X-rays, ultrasounds
- Low quality or completely blurred images
- Drawings or illustrations";
