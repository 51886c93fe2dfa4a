/// Model variant to load in the detection backend.
///
/// Larger variants trade latency for landmark accuracy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelComplexity {
    Lite = 0,
    Full = 1,
    Heavy = 2,
}

/// Configuration handed to the detection backend when a session starts.
#[derive(Clone, Debug)]
pub struct PoseConfig {
    model_complexity: ModelComplexity,
    smooth_landmarks: bool,
    enable_segmentation: bool,
    min_detection_confidence: f32,
    min_tracking_confidence: f32,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            model_complexity: ModelComplexity::Full,
            smooth_landmarks: true,
            enable_segmentation: false,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

impl PoseConfig {
    /// Set the model variant.
    pub fn with_model_complexity(mut self, complexity: ModelComplexity) -> Self {
        self.model_complexity = complexity;
        self
    }

    /// Enable or disable temporal landmark smoothing.
    pub fn with_smooth_landmarks(mut self, smooth: bool) -> Self {
        self.smooth_landmarks = smooth;
        self
    }

    /// Enable or disable person segmentation masks.
    pub fn with_enable_segmentation(mut self, enable: bool) -> Self {
        self.enable_segmentation = enable;
        self
    }

    /// Set the minimum confidence for initial person detection.
    pub fn with_min_detection_confidence(mut self, confidence: f32) -> Self {
        self.min_detection_confidence = confidence;
        self
    }

    /// Set the minimum confidence for continued landmark tracking.
    pub fn with_min_tracking_confidence(mut self, confidence: f32) -> Self {
        self.min_tracking_confidence = confidence;
        self
    }

    // Getters
    pub fn model_complexity(&self) -> ModelComplexity {
        self.model_complexity
    }

    pub fn smooth_landmarks(&self) -> bool {
        self.smooth_landmarks
    }

    pub fn enable_segmentation(&self) -> bool {
        self.enable_segmentation
    }

    pub fn min_detection_confidence(&self) -> f32 {
        self.min_detection_confidence
    }

    pub fn min_tracking_confidence(&self) -> f32 {
        self.min_tracking_confidence
    }
}

/// Target capture resolution requested from the video surface.
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    width: u32,
    height: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl CaptureConfig {
    /// Set the capture width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the capture height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
